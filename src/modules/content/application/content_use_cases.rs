use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    ListDocumentsUseCase, ResolveDocumentUseCase, ValidateDocumentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub resolve: Arc<dyn ResolveDocumentUseCase + Send + Sync>,
    pub list: Arc<dyn ListDocumentsUseCase + Send + Sync>,
    pub validate: Arc<dyn ValidateDocumentUseCase + Send + Sync>,
}
