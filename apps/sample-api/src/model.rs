//! # エンティティ

use apibase_domain::Identifiable;
use apibase_infra::Entity;
use chrono::{DateTime, Utc};

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id:    u64,
    pub name:  String,
    pub email: String,
}

/// 記事
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id:           u64,
    pub author_id:    u64,
    pub title:        String,
    pub body:         String,
    pub published_at: DateTime<Utc>,
}

/// 記事へのコメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id:         u64,
    pub article_id: u64,
    pub author_id:  u64,
    pub body:       String,
    pub created_at: DateTime<Utc>,
}

macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl Identifiable for $ty {
            fn id(&self) -> u64 {
                self.id
            }
        }

        impl Entity for $ty {
            const ENTITY_TYPE: &'static str = $name;

            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
        }
    };
}

impl_entity!(User, "User");
impl_entity!(Article, "Article");
impl_entity!(Comment, "Comment");
