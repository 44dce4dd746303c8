// Parsers for the columns mapping and chart pipeline DSLs

pub mod aesthetics;
pub mod ast;
pub mod facet;
pub mod labels;
pub mod lexer;
pub mod mapping;
pub mod pipeline;
pub mod scale;

// Public API re-exports
pub use ast::PlotSpec;
pub use mapping::parse_columns_mapping;
pub use pipeline::parse_plot_spec;
