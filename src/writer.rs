use crate::types::Block;

pub const BODY_OPEN: &str = "<body>";
pub const BODY_CLOSE: &str = "</body>";

/// Serialize blocks into the tagged text report.
///
/// One tag or text per line, joined with `\n`, no trailing newline.
pub fn render(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len() * 4 + 2);
    lines.push(BODY_OPEN.to_string());

    for block in blocks {
        match block {
            Block::Division(label) => {
                lines.push(format!("<subhead_lead>{}</subhead_lead>", label));
            }
            Block::Match(m) => {
                lines.push(format!("<subhead>{}</subhead>", m.subhead()));
                lines.push("<howto_facts>".to_string());
                lines.push(m.scorers.clone());
                lines.push("</howto_facts>".to_string());
            }
        }
    }

    lines.push(BODY_CLOSE.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchBlock, Outcome};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "<body>\n</body>");
    }

    #[test]
    fn test_render_division_and_matches() {
        let blocks = vec![
            Block::Division("2E KLASSE A".to_string()),
            Block::Match(MatchBlock {
                home: "Ajax".to_string(),
                away: "PSV".to_string(),
                outcome: Outcome::Played {
                    home_goals: 0,
                    away_goals: 0,
                    half_time_home: 0,
                    half_time_away: 0,
                },
                scorers: " ".to_string(),
            }),
            Block::Match(MatchBlock {
                home: "TeamX".to_string(),
                away: "TeamY".to_string(),
                outcome: Outcome::NotPlayed {
                    status: "afgelast".to_string(),
                },
                scorers: String::new(),
            }),
        ];

        let expected = [
            "<body>",
            "<subhead_lead>2E KLASSE A</subhead_lead>",
            "<subhead>Ajax - PSV 0-0 (0-0)</subhead>",
            "<howto_facts>",
            " ",
            "</howto_facts>",
            "<subhead>TeamX - TeamY afgelast</subhead>",
            "<howto_facts>",
            "",
            "</howto_facts>",
            "</body>",
        ]
        .join("\n");
        assert_eq!(render(&blocks), expected);
    }
}
