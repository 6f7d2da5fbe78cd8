use anyhow::{Context, Result};

use crate::config::{Config, DisplayConfig};
use crate::data_provider::AthleteRepository;
use crate::formatting::format_header;
use crate::taxonomy::GroupTaxonomy;

fn push_section(output: &mut String, title: &str, items: &[String], display: &DisplayConfig) {
    output.push_str(&format_header(title, false, display));
    if items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in items {
        output.push_str(&format!("  {}\n", item));
    }
    output.push('\n');
}

/// Filter options and the ladder layout for `repository`
pub fn format_facets(
    repository: &dyn AthleteRepository,
    taxonomy: &GroupTaxonomy,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();
    let positions = repository.list_positions();

    push_section(&mut output, "Squads", &repository.list_squads(), display);
    push_section(&mut output, "Positions", &positions, display);

    let groups: Vec<String> = taxonomy
        .groups()
        .iter()
        .map(|g| format!("{:<12} {}", g.label, g.positions.join(", ")))
        .collect();
    push_section(&mut output, "Ladder Groups", &groups, display);

    let unmapped: Vec<String> = positions
        .into_iter()
        .filter(|p| taxonomy.group_of(p).is_none())
        .collect();
    if !unmapped.is_empty() {
        push_section(
            &mut output,
            &format!("Listed under {}", taxonomy.unmapped_label()),
            &unmapped,
            display,
        );
    }

    output
}

pub fn run(repository: &dyn AthleteRepository, config: &Config) -> Result<()> {
    let taxonomy = config.taxonomy().context("Invalid position_groups in config")?;
    print!("{}", format_facets(repository, &taxonomy, &config.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::InMemoryRepository;

    #[test]
    fn test_facets_for_bundled_roster() {
        let repo = InMemoryRepository::bundled().unwrap();
        let output = format_facets(&repo, &GroupTaxonomy::default(), &DisplayConfig::default());

        assert!(output.starts_with("Squads\n"));
        assert!(output.contains("  First Team\n  Reserve Team\n  Academy U21\n"));
        assert!(output.contains("Goalkeeper   Goalkeeper\n"));
        assert!(output.contains("Defence      Defender, Center Back, Full Back\n"));
        assert!(output.contains("Listed under Other\n"));
        assert!(output.trim_end().ends_with("Utility"));
    }

    #[test]
    fn test_facets_for_empty_roster() {
        let repo = InMemoryRepository::new(Vec::new()).unwrap();
        let output = format_facets(&repo, &GroupTaxonomy::default(), &DisplayConfig::default());
        assert!(output.contains("Squads\n──────\n  (none)\n"));
        assert!(!output.contains("Listed under"));
    }
}
