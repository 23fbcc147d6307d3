pub mod default_route;
pub mod prospect_route;
