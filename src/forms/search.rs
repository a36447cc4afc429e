use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(min = 1, max = 100))]
    pub query: String,
}

/// Search text that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchPayload {
    pub query: String,
}

impl TryFrom<SearchForm> for SearchPayload {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        let form = SearchForm {
            query: form.query.trim().to_string(),
        };
        form.validate()?;
        Ok(Self { query: form.query })
    }
}
