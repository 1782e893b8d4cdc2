use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AmazonUrl(String);

impl AmazonUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
