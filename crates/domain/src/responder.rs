//! # レスポンダー
//!
//! ハンドラが保持してエンベロープを組み立てるための値。
//!
//! ```text
//! let responder = Responder::new(&context, ARTICLE_EMBEDS);
//! let articles = repository.paginate(context.page_size(), context.after()).await?;
//! Ok(responder.collection(&articles, &ArticleTransformer))
//! ```
//!
//! ステータスは既定で 200。`with_status` で上書きでき、エラー系の便利メソッドは
//! それぞれ固有のステータスを使う。

use apibase_shared::{
    ApiResponse,
    Cursor,
    ErrorCode,
    FieldMessages,
    NotificationErrors,
    NotificationResult,
    PaginatedResponse,
    ResponseMeta,
};

use crate::{
    context::ResponseContext,
    embed::{ActiveEmbeds, EmbedSpec},
    envelope::{DEFAULT_STATUS, Envelope, EnvelopeBody},
    error::DomainError,
    transformer::{self, Identifiable, Transformer},
};

/// エンベロープの組み立て役
#[derive(Debug, Clone)]
pub struct Responder<'a> {
    context: &'a ResponseContext,
    spec:    EmbedSpec,
    embeds:  ActiveEmbeds,
    status:  Option<u16>,
}

impl<'a> Responder<'a> {
    /// コンテキストとエンドポイントの埋め込み定義から作成する
    pub fn new(context: &'a ResponseContext, spec: EmbedSpec) -> Self {
        let embeds = context.resolve_embeds(&spec);
        tracing::debug!(
            embeds = ?embeds.paths(),
            scopes = ?embeds.scope_names(),
            "埋め込みを解決しました"
        );

        Self {
            context,
            spec,
            embeds,
            status: None,
        }
    }

    /// ステータスを上書きする
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// 現在のステータス（未設定なら 200）
    pub fn status(&self) -> u16 {
        self.status.unwrap_or(DEFAULT_STATUS)
    }

    pub fn context(&self) -> &ResponseContext {
        self.context
    }

    /// 解決済みの埋め込み集合
    ///
    /// リポジトリでリレーションを事前読み込みするかの判断に使う。
    pub fn embeds(&self) -> &ActiveEmbeds {
        &self.embeds
    }

    // ===== データ =====

    /// 単一リソース
    ///
    /// `meta.available_embeds` には要求の有無に関わらず埋め込み可能な全リレーションを載せる。
    pub fn item<T: Transformer>(&self, record: &T::Record, transformer: &T) -> Envelope {
        let data = transformer::transform_item(transformer, record, &self.embeds);
        let meta = ResponseMeta::available_embeds(self.spec.possible().iter().copied());

        Envelope::data(
            self.status(),
            EnvelopeBody::Item(ApiResponse::with_meta(data, meta)),
        )
    }

    /// カーソルページネーション付きコレクション
    ///
    /// `next` はページ最後のレコードの ID。空のページでは `null` になる。
    pub fn collection<T>(&self, records: &[T::Record], transformer: &T) -> Envelope
    where
        T: Transformer,
        T::Record: Identifiable,
    {
        let next = records.last().map(|record| Cursor::new(record.id()));
        let data = transformer::transform_collection(transformer, records, &self.embeds);
        let cursors = self.context.cursors(next);

        Envelope::data(
            self.status(),
            EnvelopeBody::Collection(PaginatedResponse::new(
                data,
                cursors,
                self.context.page_size(),
            )),
        )
    }

    // ===== エラー =====

    /// 現在のステータスでエラーを返す
    pub fn error(&self, code: ErrorCode, message: impl Into<String>) -> Envelope {
        Envelope::error(self.status(), code, message)
    }

    /// コード既定のメッセージでエラーを返す
    ///
    /// `status` を省略した場合は現在のステータスを使う。
    pub fn custom_error(&self, code: ErrorCode, status: Option<u16>) -> Envelope {
        Envelope::error(
            status.unwrap_or_else(|| self.status()),
            code,
            code.default_message(),
        )
    }

    /// 400 Wrong Arguments
    pub fn error_wrong_args(&self, message: impl Into<String>) -> Envelope {
        Envelope::error(400, ErrorCode::WrongArguments, message)
    }

    /// 401 Unauthorized
    pub fn error_unauthorized(&self, message: impl Into<String>) -> Envelope {
        Envelope::error(401, ErrorCode::Unauthorized, message)
    }

    /// 403 Forbidden
    pub fn error_forbidden(&self, message: impl Into<String>) -> Envelope {
        Envelope::error(403, ErrorCode::Forbidden, message)
    }

    /// 404 Not Found
    pub fn error_not_found(&self, message: impl Into<String>) -> Envelope {
        Envelope::error(404, ErrorCode::NotFound, message)
    }

    /// 500 Internal Error
    pub fn error_internal(&self, message: impl Into<String>) -> Envelope {
        Envelope::error(500, ErrorCode::InternalError, message)
    }

    /// 422 のバリデーションエラー通知
    pub fn error_validation(&self, fields: FieldMessages) -> Envelope {
        Envelope::notification(422, NotificationResult::Error, fields)
    }

    /// ドメインエラーを変換する
    pub fn domain_error(&self, err: &DomainError) -> Envelope {
        Envelope::from_domain_error(err)
    }

    // ===== 通知 =====

    /// 現在のステータスで通知を返す
    pub fn notification(
        &self,
        result: NotificationResult,
        errors: impl Into<NotificationErrors>,
    ) -> Envelope {
        Envelope::notification(self.status(), result, errors)
    }

    /// success 通知（既定 200）
    pub fn success_notification(&self, errors: impl Into<NotificationErrors>) -> Envelope {
        self.notification(NotificationResult::Success, errors)
    }

    /// info 通知（既定 200）
    pub fn info_notification(&self, errors: impl Into<NotificationErrors>) -> Envelope {
        self.notification(NotificationResult::Info, errors)
    }

    /// warning 通知（既定 200）
    pub fn warning_notification(&self, errors: impl Into<NotificationErrors>) -> Envelope {
        self.notification(NotificationResult::Warning, errors)
    }

    /// error 通知（既定 500）
    pub fn error_notification(&self, errors: impl Into<NotificationErrors>) -> Envelope {
        Envelope::notification(
            self.status.unwrap_or(500),
            NotificationResult::Error,
            errors,
        )
    }
}
