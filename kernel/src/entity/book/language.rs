use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookLanguage(String);

impl BookLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}
