pub mod page;
pub mod value_objects;

pub use page::{LanguageRedirectPlan, PageShape, PathSegments};
pub use value_objects::LanguageCode;
