//! Email notification payloads and templates.
//!
//! The content of an email comes from exactly one source: inline fields
//! (subject, optional HTML body, plaintext body) or an [`EmailTemplate`].
//! The typed API makes the mixed state unrepresentable; the `*Parts`
//! structs accept loosely populated input and reject mixes at build time.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use airship_core::{EmailAddress, MessageType, TemplateId};

use crate::error::{PayloadError, Result};

/// Inline email content, used directly or as template fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailFields {
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_body: Option<String>,
    plaintext_body: String,
}

impl EmailFields {
    /// Subject and plaintext body are required; add HTML with
    /// [`with_html_body`](Self::with_html_body).
    #[must_use]
    pub fn new(subject: impl Into<String>, plaintext_body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html_body: None,
            plaintext_body: plaintext_body.into(),
        }
    }

    /// Add an HTML body.
    #[must_use]
    pub fn with_html_body(mut self, html_body: impl Into<String>) -> Self {
        self.html_body = Some(html_body.into());
        self
    }

    /// Get the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Get the HTML body, if any.
    #[must_use]
    pub fn html_body(&self) -> Option<&str> {
        self.html_body.as_deref()
    }

    /// Get the plaintext body.
    #[must_use]
    pub fn plaintext_body(&self) -> &str {
        &self.plaintext_body
    }
}

/// Email content defined by a stored template or by inline template fields.
///
/// Serializes as the value of the payload's `template` key:
/// `{"template_id": "..."}` or `{"fields": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EmailTemplate {
    #[serde(rename = "template_id")]
    Id(TemplateId),
    #[serde(rename = "fields")]
    Fields(EmailFields),
}

/// Loosely populated template input.
#[derive(Debug, Clone, Default)]
pub struct EmailTemplateParts {
    pub template_id: Option<TemplateId>,
    pub fields: Option<EmailFields>,
}

impl EmailTemplate {
    /// Build a template from parts that must name exactly one source.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::TemplateSourceConflict`] when both a template
    /// ID and fields are given, [`PayloadError::TemplateSourceMissing`] when
    /// neither is.
    pub fn from_parts(parts: EmailTemplateParts) -> Result<Self> {
        let template = match (parts.template_id, parts.fields) {
            (Some(id), None) => Ok(Self::Id(id)),
            (None, Some(fields)) => Ok(Self::Fields(fields)),
            (Some(_), Some(_)) => Err(PayloadError::TemplateSourceConflict),
            (None, None) => Err(PayloadError::TemplateSourceMissing),
        };
        template.inspect_err(|err| tracing::debug!(error = %err, "rejected email template"))
    }
}

impl TryFrom<EmailTemplateParts> for EmailTemplate {
    type Error = PayloadError;

    fn try_from(parts: EmailTemplateParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

impl From<TemplateId> for EmailTemplate {
    fn from(id: TemplateId) -> Self {
        Self::Id(id)
    }
}

impl From<EmailFields> for EmailTemplate {
    fn from(fields: EmailFields) -> Self {
        Self::Fields(fields)
    }
}

/// Where an email payload's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailContent {
    Inline(EmailFields),
    Template(EmailTemplate),
}

/// Loosely populated email payload input.
///
/// Every field is optional here; [`CreateAndSendEmailPayload::new`] decides
/// which combinations are acceptable.
#[derive(Debug, Clone, Default)]
pub struct EmailPayloadParts {
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub plaintext_body: Option<String>,
    pub template: Option<EmailTemplate>,
    pub message_type: Option<MessageType>,
    pub sender_name: Option<String>,
    pub sender_address: Option<EmailAddress>,
    pub reply_to: Option<EmailAddress>,
    pub click_tracking: Option<bool>,
    pub open_tracking: Option<bool>,
    pub bypass_opt_in_level: Option<bool>,
}

/// The `email` override of a create-and-send notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAndSendEmailPayload {
    content: EmailContent,
    message_type: MessageType,
    sender_name: String,
    sender_address: EmailAddress,
    reply_to: EmailAddress,
    click_tracking: Option<bool>,
    open_tracking: Option<bool>,
    bypass_opt_in_level: Option<bool>,
}

impl CreateAndSendEmailPayload {
    /// Validate parts into a payload.
    ///
    /// Rules, checked in order:
    /// 1. With a template, none of subject, HTML body or plaintext body may
    ///    be set.
    /// 2. Without a template, subject and plaintext body are required (HTML
    ///    body stays optional).
    /// 3. Message type, sender name, sender address and reply-to are
    ///    required.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::ContentConflict`] or
    /// [`PayloadError::MissingField`] naming the first rule violated.
    pub fn new(parts: EmailPayloadParts) -> Result<Self> {
        Self::validate(parts)
            .inspect(|payload| {
                tracing::debug!(
                    message_type = %payload.message_type,
                    template = payload.template().is_some(),
                    "built create-and-send email payload"
                );
            })
            .inspect_err(|err| {
                tracing::debug!(error = %err, "rejected create-and-send email payload");
            })
    }

    fn validate(parts: EmailPayloadParts) -> Result<Self> {
        let content = resolve_content(
            parts.subject,
            parts.html_body,
            parts.plaintext_body,
            parts.template,
        )?;

        Ok(Self {
            content,
            message_type: parts
                .message_type
                .ok_or(PayloadError::MissingField("message_type"))?,
            sender_name: parts
                .sender_name
                .ok_or(PayloadError::MissingField("sender_name"))?,
            sender_address: parts
                .sender_address
                .ok_or(PayloadError::MissingField("sender_address"))?,
            reply_to: parts
                .reply_to
                .ok_or(PayloadError::MissingField("reply_to"))?,
            click_tracking: parts.click_tracking,
            open_tracking: parts.open_tracking,
            bypass_opt_in_level: parts.bypass_opt_in_level,
        })
    }

    /// Get the content source.
    #[must_use]
    pub const fn content(&self) -> &EmailContent {
        &self.content
    }

    /// The template, if the content comes from one.
    #[must_use]
    pub const fn template(&self) -> Option<&EmailTemplate> {
        match &self.content {
            EmailContent::Template(template) => Some(template),
            EmailContent::Inline(_) => None,
        }
    }

    /// Get the message type.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Get the sender display name.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Get the sender address.
    #[must_use]
    pub const fn sender_address(&self) -> &EmailAddress {
        &self.sender_address
    }

    /// Get the reply-to address.
    #[must_use]
    pub const fn reply_to(&self) -> &EmailAddress {
        &self.reply_to
    }
}

impl TryFrom<EmailPayloadParts> for CreateAndSendEmailPayload {
    type Error = PayloadError;

    fn try_from(parts: EmailPayloadParts) -> Result<Self> {
        Self::new(parts)
    }
}

fn resolve_content(
    subject: Option<String>,
    html_body: Option<String>,
    plaintext_body: Option<String>,
    template: Option<EmailTemplate>,
) -> Result<EmailContent> {
    if let Some(template) = template {
        let inline = [
            ("subject", subject.is_some()),
            ("html_body", html_body.is_some()),
            ("plaintext_body", plaintext_body.is_some()),
        ];
        if let Some((field, _)) = inline.into_iter().find(|(_, set)| *set) {
            return Err(PayloadError::ContentConflict { field });
        }
        return Ok(EmailContent::Template(template));
    }

    let subject = subject.ok_or(PayloadError::MissingField("subject"))?;
    let plaintext_body = plaintext_body.ok_or(PayloadError::MissingField("plaintext_body"))?;
    Ok(EmailContent::Inline(EmailFields {
        subject,
        html_body,
        plaintext_body,
    }))
}

impl Serialize for CreateAndSendEmailPayload {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match &self.content {
            EmailContent::Inline(fields) => {
                map.serialize_entry("subject", &fields.subject)?;
                if let Some(html_body) = &fields.html_body {
                    map.serialize_entry("html_body", html_body)?;
                }
                map.serialize_entry("plaintext_body", &fields.plaintext_body)?;
            }
            EmailContent::Template(template) => {
                map.serialize_entry("template", template)?;
            }
        }
        map.serialize_entry("message_type", &self.message_type)?;
        map.serialize_entry("sender_name", &self.sender_name)?;
        map.serialize_entry("sender_address", &self.sender_address)?;
        map.serialize_entry("reply_to", &self.reply_to)?;
        if let Some(click_tracking) = self.click_tracking {
            map.serialize_entry("click_tracking", &click_tracking)?;
        }
        if let Some(open_tracking) = self.open_tracking {
            map.serialize_entry("open_tracking", &open_tracking)?;
        }
        if let Some(bypass) = self.bypass_opt_in_level {
            map.serialize_entry("bypass_opt_in_level", &bypass)?;
        }
        map.end()
    }
}
