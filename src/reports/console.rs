use crate::Result;
use crate::analysis::AnalysisResult;
use crate::misc::ColorMode;
use core::fmt::{self, Write};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const LABEL_WIDTH: usize = 16;
const TABLE_INDENT: usize = 4;
const COLUMN_GAP: usize = 2;
const MAX_BAR_WIDTH: usize = 40;

pub fn generate<W: Write>(result: &AnalysisResult, color: ColorMode, writer: &mut W) -> Result<()> {
    ConsoleReporter::new(writer, color).generate_report(result)
}

enum TextStyle {
    Bold,
    Dimmed,
    Good,
    Bad,
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colorize: bool,
    width: usize,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            colorize: color_mode.colorize(),
            width: terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w)),
        }
    }

    fn generate_report(&mut self, result: &AnalysisResult) -> Result<()> {
        self.write_profile(result)?;
        writeln!(self.writer)?;
        self.write_repository_analysis(result)?;
        writeln!(self.writer)?;
        self.write_statistics(result)?;
        self.write_languages(result)?;
        Ok(())
    }

    fn write_profile(&mut self, result: &AnalysisResult) -> Result<()> {
        let profile = &result.profile;

        self.write_field("User", &profile.username, TextStyle::Bold)?;

        if let Some(name) = &profile.name {
            writeln!(self.writer, "{:<LABEL_WIDTH$}: {name}", "Name")?;
        }

        if let Some(bio) = &profile.bio {
            writeln!(self.writer, "{:<LABEL_WIDTH$}: {bio}", "Bio")?;
        }

        if let Some(created_at) = profile.created_at {
            writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Member Since", created_at.format("%Y-%m-%d"))?;
        }

        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Public Repos", profile.public_repos)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Followers", profile.followers)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Following", profile.following)?;
        Ok(())
    }

    fn write_repository_analysis(&mut self, result: &AnalysisResult) -> Result<()> {
        let analysis = &result.repository_analysis;

        write!(self.writer, "{:<LABEL_WIDTH$}: {} (", "Repositories", analysis.total_repositories)?;
        self.write_styled(format_args!("{} active", analysis.active_repos), &TextStyle::Good)?;
        write!(self.writer, ", ")?;

        let archived_style = if analysis.archived_repos > 0 {
            TextStyle::Bad
        } else {
            TextStyle::Dimmed
        };
        self.write_styled(format_args!("{} archived", analysis.archived_repos), &archived_style)?;
        writeln!(self.writer, ")")?;

        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "With Readme", analysis.repos_with_readme)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "With License", analysis.repos_with_license)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "With Description", analysis.repos_with_description)?;
        Ok(())
    }

    fn write_statistics(&mut self, result: &AnalysisResult) -> Result<()> {
        let statistics = &result.statistics;

        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Total Stars", statistics.total_stars)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Total Forks", statistics.total_forks)?;
        writeln!(self.writer, "{:<LABEL_WIDTH$}: {}", "Total Watchers", statistics.total_watchers)?;
        Ok(())
    }

    #[expect(clippy::cast_possible_truncation, reason = "bar width is bounded by the terminal width")]
    fn write_languages(&mut self, result: &AnalysisResult) -> Result<()> {
        let languages = &result.statistics.languages;
        if languages.is_empty() {
            return Ok(());
        }

        writeln!(self.writer)?;
        self.write_styled("Languages:", &TextStyle::Bold)?;
        writeln!(self.writer)?;

        // Most common language first; ties broken alphabetically
        let mut entries: Vec<(&str, u64)> = languages.iter().map(|(name, count)| (name.as_str(), *count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let name_width = entries.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);
        let max_count = entries.first().map_or(1, |(_, count)| (*count).max(1));

        let available = self
            .width
            .saturating_sub(TABLE_INDENT + name_width + COLUMN_GAP * 2 + max_count.to_string().len())
            .clamp(1, MAX_BAR_WIDTH);

        for (name, count) in entries {
            let bar_len = ((count.saturating_mul(available as u64) / max_count) as usize).max(1);
            let bar = "█".repeat(bar_len);

            write!(self.writer, "{:TABLE_INDENT$}{name:<name_width$}  ", "")?;
            self.write_styled(&bar, &TextStyle::Dimmed)?;
            writeln!(self.writer, "  {count}")?;
        }

        Ok(())
    }

    fn write_field(&mut self, label: &str, value: &str, style: TextStyle) -> Result<()> {
        write!(self.writer, "{label:<LABEL_WIDTH$}: ")?;
        self.write_styled(value, &style)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_styled<D: fmt::Display>(&mut self, text: D, style: &TextStyle) -> Result<()> {
        if self.colorize {
            match style {
                TextStyle::Bold => write!(self.writer, "{}", text.bold())?,
                TextStyle::Dimmed => write!(self.writer, "{}", text.dimmed())?,
                TextStyle::Good => write!(self.writer, "{}", text.green())?,
                TextStyle::Bad => write!(self.writer, "{}", text.red())?,
            }
        } else {
            write!(self.writer, "{text}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::hosting::{License, Profile, Repository};

    fn sample_result() -> AnalysisResult {
        let profile = Profile {
            login: "octocat".to_owned(),
            name: Some("The Octocat".to_owned()),
            bio: None,
            avatar_url: None,
            public_repos: 2,
            followers: 100,
            following: 9,
            created_at: None,
        };

        let repos = vec![
            Repository {
                stargazers_count: 5,
                forks_count: 1,
                watchers_count: 5,
                language: Some("Go".to_owned()),
                size: 10,
                license: Some(License::default()),
                description: Some("x".to_owned()),
                ..Repository::default()
            },
            Repository {
                stargazers_count: 3,
                language: Some("Rust".to_owned()),
                archived: true,
                ..Repository::default()
            },
        ];

        analyze(&profile, &repos)
    }

    #[test]
    fn test_report_contains_profile_and_counts() {
        let mut out = String::new();
        generate(&sample_result(), ColorMode::Never, &mut out).unwrap();

        assert!(out.contains("User            : octocat"));
        assert!(out.contains("Name            : The Octocat"));
        assert!(out.contains("Repositories    : 2 (1 active, 1 archived)"));
        assert!(out.contains("Total Stars     : 8"));
        assert!(out.contains("With License    : 1"));
    }

    #[test]
    fn test_report_lists_languages() {
        let mut out = String::new();
        generate(&sample_result(), ColorMode::Never, &mut out).unwrap();

        assert!(out.contains("Languages:"));
        assert!(out.contains("Go"));
        assert!(out.contains("Rust"));

        // Equal counts fall back to alphabetical order
        let go_pos = out.find("Go").unwrap();
        let rust_pos = out.find("Rust").unwrap();
        assert!(go_pos < rust_pos);
    }

    #[test]
    fn test_report_omits_empty_sections() {
        let profile = Profile {
            login: "ghost".to_owned(),
            name: None,
            bio: None,
            avatar_url: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            created_at: None,
        };

        let mut out = String::new();
        generate(&analyze(&profile, &[]), ColorMode::Never, &mut out).unwrap();

        assert!(!out.contains("Name"));
        assert!(!out.contains("Languages:"));
        assert!(out.contains("Repositories    : 0 (0 active, 0 archived)"));
    }

    #[test]
    fn test_no_color_codes_when_disabled() {
        let mut out = String::new();
        generate(&sample_result(), ColorMode::Never, &mut out).unwrap();
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_color_codes_when_forced() {
        let mut out = String::new();
        generate(&sample_result(), ColorMode::Always, &mut out).unwrap();
        assert!(out.contains('\u{1b}'));
    }
}
