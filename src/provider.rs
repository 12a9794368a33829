//! Closed set of audited cloud providers and their chat-facing identity.

/// Default avatar shown in card headers.
pub const PROWLER_AVATAR_URL: &str =
    "https://prowler.com/wp-content/uploads/logo-html.png";

pub const AWS_LOGO_URL: &str =
    "https://prowler.com/wp-content/uploads/providers/aws.png";
pub const GCP_LOGO_URL: &str =
    "https://prowler.com/wp-content/uploads/providers/gcp.png";
pub const AZURE_LOGO_URL: &str =
    "https://prowler.com/wp-content/uploads/providers/azure.png";

/// Audited environment, one variant per supported cloud.
///
/// Adding a provider means adding a variant here, not matching on type
/// strings at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    Aws {
        account: String,
    },
    Gcp {
        project_ids: Vec<String>,
    },
    Azure {
        /// (subscription name, subscription id) pairs, rendered in order.
        subscriptions: Vec<(String, String)>,
    },
    /// Provider metadata missing or unrecognized; renders an empty identity
    /// with the default logo.
    Unknown,
}

impl Provider {
    /// Markdown-friendly identity line plus the logo URL for the start icon.
    pub fn describe(&self) -> (String, &'static str) {
        match self {
            Provider::Aws { account } => (format!("AWS Account *{account}*"), AWS_LOGO_URL),
            Provider::Gcp { project_ids } => (
                format!("GCP Projects *{}*", project_ids.join(", ")),
                GCP_LOGO_URL,
            ),
            Provider::Azure { subscriptions } => {
                let mut lines = String::new();
                for (name, id) in subscriptions {
                    lines.push_str(&format!("- *{name}: {id}*\n"));
                }
                (format!("Azure Subscriptions:\n{lines}"), AZURE_LOGO_URL)
            }
            Provider::Unknown => (String::new(), AWS_LOGO_URL),
        }
    }
}
