pub mod chart_record;
pub mod color_bucket;
pub mod edge;
pub mod selection;
pub mod series;
pub mod site;
