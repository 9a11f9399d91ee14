pub mod graphs;
pub mod project;
pub mod report;
pub mod runs;
pub mod tag;

pub use graphs::*;
pub use project::*;
pub use report::*;
pub use runs::*;
pub use tag::*;
