//! Pure Cards v2 payload builders. No I/O; fully deterministic.

use serde::Deserialize;
use serde_json::{json, Value};

/// Aggregate findings statistics for one scan.
///
/// Every field defaults to 0 so a partial stats mapping deserializes cleanly
/// and the builders never fail on a missing counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanStats {
    pub total_pass: u64,
    pub total_fail: u64,
    pub total_critical_severity_pass: u64,
    pub total_critical_severity_fail: u64,
    pub total_high_severity_pass: u64,
    pub total_high_severity_fail: u64,
    pub total_medium_severity_pass: u64,
    pub total_medium_severity_fail: u64,
    pub total_low_severity_pass: u64,
    pub total_low_severity_fail: u64,
    pub resources_count: u64,
    pub findings_count: u64,
}

/// Share of `count` over `total` as a percentage rounded to 2 decimals.
/// Returns 0.0 when `total` is 0 instead of failing.
pub(crate) fn calculate_percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}

// Render like a rounded float: 54.55, 45.45, 0.0, 50.0
fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub(crate) fn build_summary_title(identity: &str, stats: &ScanStats) -> String {
    let identity = if identity.is_empty() {
        "your environment"
    } else {
        identity
    };
    format!(
        "Hey there 👋 \n I'm *Prowler*, _the handy multi-cloud security tool_ \
         :cloud::key:\n\n I have just finished the security assessment on your \
         {identity} with a total of *{}* findings.",
        stats.findings_count
    )
}

pub(crate) fn build_identity_section(identity: &str, logo: &str, stats: &ScanStats) -> Value {
    let environment = if identity.is_empty() {
        "Unknown provider"
    } else {
        identity
    };
    json!({
        "widgets": [
            {
                "decoratedText": {
                    "text": format!("*Environment*\n{environment}"),
                    "startIcon": {
                        "altText": "Provider Logo",
                        "imageUrl": logo,
                    },
                }
            },
            {
                "textParagraph": {
                    "text": build_summary_title(identity, stats),
                }
            },
        ]
    })
}

pub(crate) fn build_statistics_section(stats: &ScanStats) -> Value {
    let pass_percentage = calculate_percentage(stats.total_pass, stats.findings_count);
    let fail_percentage = calculate_percentage(stats.total_fail, stats.findings_count);

    // Fixed severity order: Critical, High, Medium, Low
    let pass_severity = format!(
        "*Severities:* Critical {} • High {} • Medium {} • Low {}",
        stats.total_critical_severity_pass,
        stats.total_high_severity_pass,
        stats.total_medium_severity_pass,
        stats.total_low_severity_pass,
    );
    let fail_severity = format!(
        "*Severities:* Critical {} • High {} • Medium {} • Low {}",
        stats.total_critical_severity_fail,
        stats.total_high_severity_fail,
        stats.total_medium_severity_fail,
        stats.total_low_severity_fail,
    );

    json!({
        "widgets": [
            {
                "decoratedText": {
                    "text": format!(
                        "✅ *{} Passed findings* ({}%)",
                        stats.total_pass,
                        format_percentage(pass_percentage)
                    ),
                    "bottomText": pass_severity,
                }
            },
            {
                "decoratedText": {
                    "text": format!(
                        "❌ *{} Failed findings* ({}%)",
                        stats.total_fail,
                        format_percentage(fail_percentage)
                    ),
                    "bottomText": fail_severity,
                }
            },
            {
                "decoratedText": {
                    "text": format!("📊 *{} Scanned Resources*", stats.resources_count),
                    "bottomText": format!(
                        "Total findings analysed: {}",
                        stats.findings_count
                    ),
                }
            },
        ]
    })
}

pub(crate) fn build_parameters_section(args: &str) -> Value {
    let parameters_text = if args.is_empty() {
        "*Used parameters*\n`prowler`".to_string()
    } else {
        format!("*Used parameters*\n`prowler {args}`")
    };
    json!({
        "widgets": [
            {
                "textParagraph": {
                    "text": parameters_text,
                }
            }
        ]
    })
}

/// Assemble the full Cards v2 message for one scan summary.
pub(crate) fn build_message(
    card_header: &str,
    subtitle: &str,
    avatar: &str,
    identity: &str,
    logo: &str,
    stats: &ScanStats,
    args: &str,
) -> Value {
    json!({
        "cardsV2": [
            {
                "cardId": "prowler-summary",
                "card": {
                    "header": {
                        "title": card_header,
                        "subtitle": subtitle,
                        "imageUrl": avatar,
                        "imageType": "SQUARE",
                    },
                    "sections": [
                        build_identity_section(identity, logo, stats),
                        build_statistics_section(stats),
                        build_parameters_section(args),
                    ],
                },
            }
        ]
    })
}

/// Minimal fixed card used by the connection test; carries no live stats.
pub(crate) fn build_test_message(avatar: &str) -> Value {
    json!({
        "cardsV2": [
            {
                "cardId": "prowler-test",
                "card": {
                    "header": {
                        "title": "Prowler Google Chat Integration",
                        "subtitle": "Connection test",
                        "imageUrl": avatar,
                        "imageType": "SQUARE",
                    },
                    "sections": [
                        {
                            "widgets": [
                                {
                                    "textParagraph": {
                                        "text": "This is a test message from Prowler to verify webhook connectivity."
                                    }
                                }
                            ]
                        }
                    ],
                },
            }
        ]
    })
}
