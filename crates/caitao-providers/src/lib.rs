//! caitao-providers: agregados del conjunto de trabajo, uno por
//! `DataProvider`, y el `AggregateDocument` que los reúne.

pub mod all_items;
pub mod city_details;
pub mod city_stats;
mod counting;
pub mod document;
pub mod name_distribution;
pub mod sankey;
pub mod shape_pivot;
pub mod shape_ranking;
pub mod spotlight;
pub mod summary;
pub mod trait_dataprovider;

#[cfg(test)]
mod test_support;

pub use document::AggregateDocument;
pub use trait_dataprovider::DataProvider;
