//! Alert digestion for the notification pipeline.
//!
//! Takes the alert records fetched from TDX, drops the ones reporting
//! normal service, and renders the rest into a single message body.
//!
//! # Example
//!
//! ```
//! use tdx_client::MetroAlert;
//!
//! let alerts = vec![MetroAlert {
//!     title: "板南線延誤".to_string(),
//!     description: "列車延誤約十分鐘".to_string(),
//!     status: 2,
//!     reason: "號誌異常".to_string(),
//!     effect: "班距拉長".to_string(),
//!     ..Default::default()
//! }];
//!
//! let message = alert_digest::digest(&alerts).unwrap();
//! assert!(message.contains("板南線延誤"));
//! ```

use tdx_client::MetroAlert;

/// Marker prefixed to every rendered line.
pub const LINE_MARKER: &str = "🚨";

/// Render the abnormal alerts into one message body.
///
/// Returns `None` when the list is empty or every record reports normal
/// service; the caller stays silent in that case. Otherwise each abnormal
/// alert becomes a four-line block (title, description, reason, effect),
/// in input order, and the blocks are joined with a blank line.
pub fn digest(alerts: &[MetroAlert]) -> Option<String> {
    let blocks: Vec<String> = alerts
        .iter()
        .filter(|alert| !alert.is_normal())
        .map(render_block)
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

fn render_block(alert: &MetroAlert) -> String {
    format!(
        "{m} {}\n{m} {}\n{m} {}\n{m} {}",
        alert.title,
        alert.description,
        alert.reason,
        alert.effect,
        m = LINE_MARKER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abnormal(title: &str, description: &str, reason: &str, effect: &str) -> MetroAlert {
        MetroAlert {
            title: title.to_string(),
            description: description.to_string(),
            status: 2,
            reason: reason.to_string(),
            effect: effect.to_string(),
            ..Default::default()
        }
    }

    fn normal() -> MetroAlert {
        MetroAlert {
            title: "全線正常".to_string(),
            status: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_is_silent() {
        assert!(digest(&[]).is_none());
    }

    #[test]
    fn test_all_normal_is_silent() {
        let alerts = vec![normal(), normal(), normal()];
        assert!(digest(&alerts).is_none());
    }

    #[test]
    fn test_single_abnormal_block() {
        let alerts = vec![abnormal("A", "B", "C", "D")];
        let message = digest(&alerts).unwrap();
        assert_eq!(message, "🚨 A\n🚨 B\n🚨 C\n🚨 D");
    }

    #[test]
    fn test_fields_render_in_order() {
        let alerts = vec![abnormal("A", "B", "C", "D")];
        let message = digest(&alerts).unwrap();

        let a = message.find("A").unwrap();
        let b = message.find("B").unwrap();
        let c = message.find("C").unwrap();
        let d = message.find("D").unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn test_normal_records_are_filtered_out() {
        let alerts = vec![normal(), abnormal("延誤", "描述", "原因", "影響"), normal()];
        let message = digest(&alerts).unwrap();
        assert!(message.contains("延誤"));
        assert!(!message.contains("全線正常"));
    }

    #[test]
    fn test_blocks_join_with_blank_line_in_input_order() {
        let alerts = vec![
            abnormal("first", "d1", "r1", "e1"),
            normal(),
            abnormal("second", "d2", "r2", "e2"),
        ];
        let message = digest(&alerts).unwrap();

        let blocks: Vec<&str> = message.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("first"));
        assert!(blocks[1].contains("second"));
    }

    #[test]
    fn test_nonzero_nonone_statuses_are_abnormal() {
        for status in [0, 2, 3, 99] {
            let mut alert = abnormal("t", "d", "r", "e");
            alert.status = status;
            assert!(digest(&[alert]).is_some(), "status {} should notify", status);
        }
    }
}
