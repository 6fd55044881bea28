//! `classify describe`

use anyhow::Result;
use labels::Language;
use std::fmt::Write as _;
use types::pillar::{Pillar, SubPillar, IMPACT_MAX, IMPACT_MIN, LIKELIHOOD_MAX, LIKELIHOOD_MIN};

use crate::cli::DescribeArgs;

pub fn run(args: &DescribeArgs, language: Language) -> Result<()> {
    print!("{}", render_description(language, args.pillar.map(Pillar::from)));
    Ok(())
}

/// Rating guidance for one pillar, or all of them when `only` is `None`
pub fn render_description(language: Language, only: Option<Pillar>) -> String {
    let mut out = String::new();

    if only.is_none() {
        let _ = writeln!(out, "Likelihood");
        for level in LIKELIHOOD_MIN..=LIKELIHOOD_MAX {
            if let Some(label) = labels::likelihood_label(level, language) {
                let _ = writeln!(out, "  {label}");
            }
        }
        let _ = writeln!(out);
    }

    let pillars = Pillar::ALL.iter().copied().filter(|p| only.map_or(true, |o| o == *p));
    for pillar in pillars {
        let _ = writeln!(out, "{}", pillar.display_name());
        let _ = writeln!(out, "{}", labels::impact_heading(language));

        if pillar == Pillar::National {
            for sub in SubPillar::ALL {
                let _ = writeln!(out, "  {}: {}", sub.display_name(), labels::definition(sub, language));
                for level in IMPACT_MIN..=IMPACT_MAX {
                    if let Some(text) = labels::sub_impact_description(sub, level, language) {
                        let _ = writeln!(out, "    {level}. {text}");
                    }
                }
            }
        } else {
            for level in IMPACT_MIN..=IMPACT_MAX {
                if let Some(text) = labels::impact_description(pillar, level, language) {
                    let label = labels::impact_label(level, language).unwrap_or_default();
                    let _ = writeln!(out, "  {level}. {label}: {text}");
                }
            }
        }
        let _ = writeln!(out);
    }
    out
}
