/*!
# User Notices

Transient, non-blocking messages shown after an action: a submission was
accepted, input was rejected, or the wallet or contract refused.
*/

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    pub fn contribution_submitted() -> Self {
        Self::info("Contribution submitted", "Your transaction is being processed.")
    }

    pub fn withdrawal_submitted() -> Self {
        Self::info("Withdrawal submitted", "Your transaction is being processed.")
    }

    pub fn refund_requested() -> Self {
        Self::info("Refund requested", "Your transaction is being processed.")
    }

    pub fn campaign_deployed() -> Self {
        Self::info(
            "Campaign deployed!",
            "Your crowdfunding campaign has been successfully deployed.",
        )
    }

    pub fn missing_information() -> Self {
        Self::error("Missing information", "Please fill in all fields")
    }

    pub fn deployment_failed() -> Self {
        Self::error(
            "Deployment failed",
            "There was an error deploying your campaign. Please try again.",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.variant {
            NoticeVariant::Default => "✅",
            NoticeVariant::Destructive => "❌",
        };
        write!(f, "{} {}: {}", icon, self.title, self.description)
    }
}
