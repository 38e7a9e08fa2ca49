use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::{option_fields::OptionField, validation::{new_validation_error, validate_url}},
    utils::markdown::{safe_markdown_to_html, sanitize_markdown_content},
};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 150;
const MAX_CONTENT_LENGTH: u64 = 20_000;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct News {
    pub id: Uuid,
    pub title: String,
    pub content_markdown: String,
    pub image_url: Option<String>,
    /// `None` once the author account has been purged.
    pub author_id: Option<Uuid>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsInsert {
    pub title: String,
    pub content_markdown: String,
    pub image_url: Option<String>,
    pub author_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub title: String,
    pub content_markdown: String,
    pub image_url: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsListItem {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content_markdown: String,
    pub content_html: String,
    pub image_url: Option<String>,
    pub author_id: Option<Uuid>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsListResponse {
    pub items: Vec<NewsListItem>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewNewsRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_CONTENT_LENGTH, message = "Content cannot be empty"))]
    pub content_markdown: String,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateNewsRequest {
    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_optional_title")
    )]
    pub title: OptionField<String>,

    #[validate(length(min = 1, max = MAX_CONTENT_LENGTH, message = "Content cannot be empty"))]
    pub content_markdown: OptionField<String>,

    #[validate(custom(function = "validate_optional_url_field"))]
    pub image_url: OptionField<String>,
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

pub fn validate_optional_title(value: &OptionField<String>) -> Result<(), ValidationError> {
    match value {
        OptionField::SetToValue(title) => validate_title(title),
        OptionField::SetToNull => Err(new_validation_error("title_required", "Title cannot be removed")),
        OptionField::Unchanged => Ok(()),
    }
}

pub fn validate_optional_url_field(value: &OptionField<String>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewNewsRequest {
    pub fn prepare_for_insert(self, author_id: Uuid) -> NewsInsert {
        NewsInsert {
            title: self.title,
            content_markdown: sanitize_markdown_content(&self.content_markdown),
            image_url: self.image_url,
            author_id,
        }
    }
}

impl UpdateNewsRequest {
    /// Merges the patch into the stored post. `content_markdown: null` keeps
    /// the current body.
    pub fn apply_to(self, current: &News) -> NewsUpdate {
        NewsUpdate {
            title: self.title.apply_required(current.title.clone()),
            content_markdown: self
                .content_markdown
                .value_ref()
                .map(|c| sanitize_markdown_content(c))
                .unwrap_or_else(|| current.content_markdown.clone()),
            image_url: self.image_url.apply(current.image_url.clone()),
        }
    }
}

fn excerpt(markdown: &str, max_chars: usize) -> String {
    let plain: String = markdown
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if plain.chars().count() <= max_chars {
        plain
    } else {
        let cut: String = plain.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

impl News {
    pub fn to_list_item(&self) -> NewsListItem {
        NewsListItem {
            id: self.id,
            title: self.title.clone(),
            excerpt: excerpt(&self.content_markdown, 200),
            image_url: self.image_url.clone(),
            author_name: self.author_name.clone(),
            created_at: self.created_at,
        }
    }

    pub fn to_detail_response(&self) -> NewsDetailResponse {
        NewsDetailResponse {
            id: self.id,
            title: self.title.clone(),
            content_markdown: self.content_markdown.clone(),
            content_html: safe_markdown_to_html(&self.content_markdown),
            image_url: self.image_url.clone(),
            author_id: self.author_id,
            author_name: self.author_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
