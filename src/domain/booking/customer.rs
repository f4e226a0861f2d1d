use derive_more::{Display, Error};
use serde::Serialize;

/// お客様
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Customer {
    name: String,
    phone: String,
    email: Option<String>,
}

impl Customer {
    pub fn create(
        name: String,
        phone: String,
        email: Option<String>,
    ) -> Result<Self, CustomerError> {
        Self::validate_name(&name)?;
        Ok(Customer {
            name,
            phone,
            email: email.filter(|e| !e.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    fn validate_name(name: &str) -> Result<(), CustomerError> {
        if name.is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }
}

/// お客様エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum CustomerError {
    /// 名前が指定されていません
    #[display(fmt = "Customer name is not specified")]
    NameRequired,
}
