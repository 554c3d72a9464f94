use std::sync::Arc;

use crate::application::{dto::SlugDto, ports::util::SlugGenerator};

pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn preview(&self, text: Option<&str>) -> SlugDto {
        let source = text.unwrap_or_default().to_string();
        let slug = self.generator.slugify(&source);
        SlugDto { source, slug }
    }
}
