use colored::*;
use pf_content::portfolio::Portfolio;
use pf_navigation::section::SectionId;

const RULE_WIDTH: usize = 60;

fn heading(out: &mut String, text: &str) {
    out.push_str(&format!("\n{}\n{}\n", text.bold().cyan(), "─".repeat(RULE_WIDTH).dimmed()));
}

fn hero(out: &mut String, portfolio: &Portfolio) {
    let profile = &portfolio.profile;

    out.push_str(&format!("{}\n", profile.eyebrow.to_uppercase().cyan()));
    out.push_str(&format!(
        "{} {}\n",
        profile.greeting.bold(),
        profile.name.bold().bright_cyan()
    ));
    out.push_str(&format!("{}\n", profile.tagline.dimmed()));
    out.push_str(&format!("{}\n", profile.summary));
}

fn about(out: &mut String, portfolio: &Portfolio) {
    let about = &portfolio.about;
    heading(out, &about.heading);

    for paragraph in &about.paragraphs {
        out.push_str(&format!("{}\n\n", paragraph));
    }

    if !about.journey.is_empty() {
        out.push_str(&format!("{}\n", "MY JOURNEY".magenta().bold()));
        for milestone in &about.journey {
            out.push_str(&format!(
                "  {} {} - {}\n",
                "●".magenta(),
                milestone.title.bold(),
                milestone.detail.dimmed()
            ));
        }
    }

    for education in &about.education {
        out.push_str(&format!(
            "\n{} {}\n  {}\n",
            education.icon,
            education.degree.bold().cyan(),
            education.institution
        ));
        if let Some(period) = &education.period {
            out.push_str(&format!("  {}\n", period.magenta()));
        }
        for fact in &education.facts {
            let value = if fact.emphasized {
                fact.value.magenta().bold()
            } else {
                fact.value.bold()
            };
            out.push_str(&format!("  {:<16}{}\n", fact.label.dimmed(), value));
        }
    }

    if !about.stats.is_empty() {
        out.push('\n');
        let stats: Vec<String> = about
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.value.bold().cyan(), stat.label.dimmed()))
            .collect();
        out.push_str(&format!("{}\n", stats.join("   ")));
    }
}

fn skills(out: &mut String, portfolio: &Portfolio) {
    let skills = &portfolio.skills;
    if skills.groups.is_empty() {
        return;
    }

    heading(out, &skills.heading);
    for group in &skills.groups {
        out.push_str(&format!("{} {}\n", group.icon, group.title.bold()));
        out.push_str(&format!("  {}\n", group.skills.join(" · ")));
    }
}

fn experience(out: &mut String, portfolio: &Portfolio) {
    let experience = &portfolio.experience;
    heading(out, &experience.heading);

    for entry in &experience.entries {
        out.push_str(&format!(
            "{} {} {}\n",
            entry.icon,
            entry.category.to_uppercase().cyan(),
            entry.date.dimmed()
        ));
        out.push_str(&format!(
            "  {} - {}\n  {}\n",
            entry.title.bold(),
            entry.subtitle.magenta(),
            entry.organization
        ));
        if let Some(description) = &entry.description {
            out.push_str(&format!("  {}\n", description.dimmed()));
        }
        for highlight in &entry.highlights {
            out.push_str(&format!("  {} {}\n", "✓".green(), highlight));
        }
        out.push('\n');
    }
}

fn projects(out: &mut String, portfolio: &Portfolio) {
    let projects = &portfolio.projects;
    heading(out, &projects.heading);

    for project in &projects.entries {
        out.push_str(&format!(
            "{} [{}]\n  {}\n",
            project.title.bold(),
            project.status.yellow(),
            project.description.dimmed()
        ));
    }
    if let Some(note) = &projects.note {
        out.push_str(&format!("\n{}\n", note.italic()));
    }
}

fn contact(out: &mut String, portfolio: &Portfolio) {
    let contact = &portfolio.contact;
    heading(out, &contact.heading);

    out.push_str(&format!("{}\n\n", contact.blurb));
    for card in &contact.cards {
        out.push_str(&format!(
            "  {:<10}{} <{}>\n",
            card.label.bold(),
            card.value,
            card.href.underline()
        ));
    }
    for social in &contact.socials {
        out.push_str(&format!("  {:<10}{}\n", social.label.bold(), social.href.underline()));
    }
    out.push_str(&format!("\n{}\n", contact.footer.dimmed()));
}

/// Render one navigable section. Sections the content does not provide
/// render as nothing.
pub fn render_section(portfolio: &Portfolio, section: SectionId) -> String {
    let mut out = String::new();
    if !portfolio.anchors().contains(&section) {
        return out;
    }

    match section {
        SectionId::Home => hero(&mut out, portfolio),
        SectionId::About => about(&mut out, portfolio),
        SectionId::Experience => experience(&mut out, portfolio),
        SectionId::Projects => projects(&mut out, portfolio),
        SectionId::Contact => contact(&mut out, portfolio),
    }
    out
}

/// Render the whole page in page order, skills included.
pub fn render(portfolio: &Portfolio) -> String {
    let mut out = String::new();

    for section in portfolio.anchors() {
        out.push_str(&render_section(portfolio, section));
        if section == SectionId::About {
            skills(&mut out, portfolio);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pf_content::Portfolio;
    use pf_navigation::section::SectionId;

    use crate::terminal as sut;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn page_order_puts_skills_after_about() {
        plain();
        let text = sut::render(&Portfolio::builtin());

        let about = text.find("About Me").unwrap();
        let skills = text.find("Skills & Expertise").unwrap();
        let experience = text.find("Experience & Certifications").unwrap();
        let contact = text.find("Let's Build Something Great").unwrap();

        assert!(about < skills);
        assert!(skills < experience);
        assert!(experience < contact);
    }

    #[test]
    fn single_section_excludes_the_rest() {
        plain();
        let text = sut::render_section(&Portfolio::builtin(), SectionId::Contact);

        assert!(text.contains("mailto:amanshah0120@gmail.com"));
        assert!(!text.contains("About Me"));
    }

    #[test]
    fn missing_section_renders_nothing() {
        plain();
        let mut portfolio = Portfolio::builtin();
        portfolio.experience.entries.clear();

        assert!(sut::render_section(&portfolio, SectionId::Experience).is_empty());
        assert!(!sut::render(&portfolio).contains("Experience & Certifications"));
    }

    #[test]
    fn hero_shows_name() {
        plain();
        let text = sut::render_section(&Portfolio::builtin(), SectionId::Home);

        assert!(text.contains("Hey, I'm Aman Kumar Sah"));
    }
}
