use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DirectoryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_location(field_name: &str, location: &str) -> Result<()> {
    if location.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: "Location cannot be empty".to_string(),
        });
    }

    if !location.starts_with('/') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: "Location must be an absolute repository path".to_string(),
        });
    }

    if location.contains('\0') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: location.to_string(),
            reason: "Location contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_locale_tag(field_name: &str, tag: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z]{2,8}([-_][A-Za-z0-9]{2,8})*$").unwrap();

    if re.is_match(tag) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Expected a locale tag such as `de` or `de-CH`".to_string(),
        })
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
