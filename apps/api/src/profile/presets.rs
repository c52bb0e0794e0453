//! Canned replies for the suggested questions shown under the chat box.
//! Each reply names the tool the chat layer should call for the full answer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::tools::ToolName;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetReply {
    pub reply: String,
    pub tool: ToolName,
}

/// Question → reply, kept in authoring order. Serializes as a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetReplies(Vec<(&'static str, PresetReply)>);

impl Serialize for PresetReplies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (question, reply) in &self.0 {
            map.serialize_entry(question, reply)?;
        }
        map.end()
    }
}

const CANNED: &[(&str, &str, ToolName)] = &[
    (
        "What are your skills?",
        "My technical expertise spans multiple domains...",
        ToolName::GetSkills,
    ),
    (
        "What projects are you most proud of?",
        "Here are some of my key projects...",
        ToolName::GetProjects,
    ),
    (
        "Can I see your resume?",
        "Here's my resume with all the details...",
        ToolName::GetResume,
    ),
    (
        "How can I reach you?",
        "Here's how you can reach me...",
        ToolName::GetContact,
    ),
    (
        "Am I available for opportunities?",
        "Here are my current opportunities and availability...",
        ToolName::GetJob,
    ),
];

/// Only the introduction reply depends on the profile (it echoes the bio).
pub fn preset_replies(bio: &str) -> PresetReplies {
    let mut replies = vec![(
        "Who are you?",
        PresetReply {
            reply: bio.to_string(),
            tool: ToolName::GetPresentation,
        },
    )];
    replies.extend(CANNED.iter().map(|(question, reply, tool)| {
        (
            *question,
            PresetReply {
                reply: reply.to_string(),
                tool: *tool,
            },
        )
    }));
    PresetReplies(replies)
}
