pub mod series_builder;
