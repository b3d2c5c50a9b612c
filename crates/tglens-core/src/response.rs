//! Assembly of the final response record.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{
    age,
    datacenter::dc_location,
    ports::{Directory, EntityRecord},
    resolver::Resolved,
    status::status_display,
    Result,
};

/// Deep links into native and web clients for one entity.
#[derive(Clone, Debug, Serialize)]
pub struct DeepLinks {
    pub android: String,
    pub ios: String,
    pub web: String,
}

/// Variant-specific fields, flattened into the record with a `type` tag.
///
/// The chat tag is dynamic (`group`/`supergroup`/`channel`/...), so the tag is
/// an explicit field rather than a serde-derived discriminant.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum EntityDetails {
    User {
        #[serde(rename = "type")]
        kind: &'static str,
        first_name: String,
        last_name: String,
        username: Option<String>,
        is_premium: bool,
        status: &'static str,
        is_bot: bool,
        account_created: String,
        account_age: String,
    },
    Chat {
        #[serde(rename = "type")]
        kind: String,
        title: String,
        members_count: i64,
        description: String,
    },
}

/// The output-only record returned on a successful resolve.
#[derive(Clone, Debug, Serialize)]
pub struct ResponseRecord {
    pub id: i64,
    pub dc_id: Option<i32>,
    pub dc_location: &'static str,
    pub is_verified: bool,
    pub is_scam: bool,
    pub is_fake: bool,
    pub access_hash: String,
    #[serde(flatten)]
    pub details: EntityDetails,
    pub photo_url: String,
    pub links: DeepLinks,
}

/// Merge common fields, variant fields, the photo URL and deep links into the
/// final record. The photo reference is resolved via the directory only when
/// one exists; otherwise the configured fallback URL is used.
pub async fn assemble(
    resolved: Resolved,
    directory: &dyn Directory,
    fallback_photo_url: &str,
) -> Result<ResponseRecord> {
    let (record, details) = match resolved {
        Resolved::Account(rec) => {
            let details = user_details(&rec);
            (rec, details)
        }
        Resolved::Chat(rec) => {
            let details = chat_details(&rec);
            (rec, details)
        }
    };

    let photo_url = match &record.photo_file_id {
        Some(file_id) => directory.file_url(file_id).await?,
        None => fallback_photo_url.to_string(),
    };

    Ok(ResponseRecord {
        id: record.id,
        dc_id: record.dc_id,
        dc_location: dc_location(record.dc_id),
        is_verified: record.is_verified,
        is_scam: record.is_scam,
        is_fake: record.is_fake,
        access_hash: access_hash(record.id),
        details,
        photo_url,
        links: deep_links(record.id, record.username.as_deref()),
    })
}

fn user_details(rec: &EntityRecord) -> EntityDetails {
    let creation = age::estimate_creation_date(rec.id);
    EntityDetails::User {
        kind: "user",
        first_name: rec.first_name.clone().unwrap_or_default(),
        last_name: rec.last_name.clone().unwrap_or_default(),
        username: rec.username.clone(),
        is_premium: rec.is_premium,
        status: status_display(rec.status.as_deref()),
        is_bot: rec.is_bot,
        account_created: age::format_creation_date(creation),
        account_age: age::account_age(creation),
    }
}

fn chat_details(rec: &EntityRecord) -> EntityDetails {
    EntityDetails::Chat {
        kind: rec.chat_type.clone().unwrap_or_else(|| "chat".to_string()),
        title: rec.title.clone().unwrap_or_default(),
        members_count: rec.members_count.unwrap_or(0),
        description: rec.description.clone().unwrap_or_default(),
    }
}

/// Deep links templated from the entity id, falling back to the numeric id
/// for the web link when no username exists.
pub fn deep_links(id: i64, username: Option<&str>) -> DeepLinks {
    let web_target = username
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string());
    DeepLinks {
        android: format!("tg://openmessage?user_id={id}"),
        ios: format!("tg://user?id={id}"),
        web: format!("https://t.me/{web_target}"),
    }
}

/// Cosmetic pseudo access hash: the first 16 hex chars of SHA-256 over the
/// decimal id. Deterministic and non-secret; it has no auth significance.
pub fn access_hash(id: i64) -> String {
    let digest = Sha256::digest(id.to_string().as_bytes());
    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}
