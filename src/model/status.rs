use serde::{Deserialize, Serialize};

use super::filter::FilterResult;

/// The subset of a Mastodon status the filters look at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id: String,

    /// HTML body
    #[serde(default)]
    pub content: String,

    /// Content warning
    #[serde(default)]
    pub spoiler_text: String,

    #[serde(default)]
    pub reblog: Option<Box<Status>>,

    #[serde(default)]
    pub poll: Option<Poll>,

    #[serde(default, rename = "media_attachments")]
    pub attachments: Vec<Attachment>,

    /// Server-side v2 filter matches
    #[serde(default)]
    pub filtered: Vec<FilterResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    #[serde(default)]
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub description: Option<String>,
}

impl Status {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_spoiler(mut self, spoiler_text: impl Into<String>) -> Self {
        self.spoiler_text = spoiler_text.into();
        self
    }

    pub fn with_poll<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poll = Some(Poll {
            options: options
                .into_iter()
                .map(|title| PollOption { title: title.into() })
                .collect(),
        });
        self
    }

    pub fn with_attachment(mut self, description: Option<&str>) -> Self {
        self.attachments.push(Attachment {
            description: description.map(str::to_string),
        });
        self
    }

    pub fn with_filtered(mut self, result: FilterResult) -> Self {
        self.filtered.push(result);
        self
    }

    /// Wrap `original` in a boost by this status
    pub fn reblogging(mut self, original: Status) -> Self {
        self.reblog = Some(Box::new(original));
        self
    }

    /// The status whose text is displayed: the boosted status for a reblog,
    /// otherwise this one
    pub fn actionable(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }

    /// Server-side filter results on this status and, for a reblog, on the
    /// boosted status
    pub fn filter_results(&self) -> impl Iterator<Item = &FilterResult> {
        self.filtered
            .iter()
            .chain(self.reblog.iter().flat_map(|original| original.filtered.iter()))
    }

    /// Descriptions of attachments that have one, in attachment order
    pub fn attachment_descriptions(&self) -> Vec<&str> {
        self.attachments
            .iter()
            .filter_map(|a| a.description.as_deref())
            .collect()
    }
}
