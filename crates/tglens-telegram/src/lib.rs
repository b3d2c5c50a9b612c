//! Telegram adapter (teloxide).
//!
//! This crate implements the `tglens-core` Directory port over the Telegram
//! Bot API. The Bot API exposes no dc id, verification/scam/fake/premium
//! flags and no presence for arbitrary entities; those stay at their absent
//! defaults and the core derives "Unknown" display values from them.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{Chat, ChatKind, PublicChatKind, Recipient},
};

use tglens_core::{
    errors::Error,
    ports::{Directory, EntityRecord},
    Result,
};

#[derive(Clone)]
pub struct TelegramDirectory {
    bot: Bot,
}

impl TelegramDirectory {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Upstream(format!("telegram error: {e}"))
    }
}

fn record_from_chat(chat: &Chat, members_count: Option<i64>) -> EntityRecord {
    let mut record = EntityRecord {
        id: chat.id.0,
        photo_file_id: chat.photo.as_ref().map(|p| p.big_file_id.clone()),
        ..Default::default()
    };

    match &chat.kind {
        ChatKind::Private(private) => {
            record.first_name = private.first_name.clone();
            record.last_name = private.last_name.clone();
            record.username = private.username.clone();
            record.chat_type = Some("private".to_string());
        }
        ChatKind::Public(public) => {
            record.title = public.title.clone();
            record.description = public.description.clone();
            record.username = chat.username().map(str::to_string);
            record.chat_type = Some(public_kind_name(&public.kind).to_string());
            record.members_count = members_count;
        }
    }

    record
}

fn public_kind_name(kind: &PublicChatKind) -> &'static str {
    match kind {
        PublicChatKind::Channel(_) => "channel",
        PublicChatKind::Group(_) => "group",
        PublicChatKind::Supergroup(_) => "supergroup",
    }
}

#[async_trait]
impl Directory for TelegramDirectory {
    async fn lookup(&self, query: &str) -> Result<EntityRecord> {
        let chat = self
            .bot
            .get_chat(Recipient::ChannelUsername(query.to_string()))
            .await
            .map_err(Self::map_err)?;

        // Best-effort member count for public chats; absence is fine.
        let members_count = if chat.is_private() {
            None
        } else {
            self.bot
                .get_chat_member_count(chat.id)
                .await
                .ok()
                .map(i64::from)
        };

        Ok(record_from_chat(&chat, members_count))
    }

    async fn file_url(&self, file_id: &str) -> Result<String> {
        let file = self
            .bot
            .get_file(file_id.to_string())
            .await
            .map_err(Self::map_err)?;

        let base = self.bot.api_url();
        Ok(format!(
            "{}/file/bot{}/{}",
            base.as_str().trim_end_matches('/'),
            self.bot.token(),
            file.path
        ))
    }
}
