use std::fs;
use std::path::Path;

use pf_content::portfolio::{Accent, Portfolio};
use pf_navigation::section::SectionId;
use tracing::info;

use crate::Result;

const STYLE: &str = r#"
html { scroll-behavior: smooth; }
body { margin: 0; font-family: system-ui, sans-serif; background: #0b0f1a; color: #e6e9f0; }
nav { position: fixed; top: 0; width: 100%; background: rgba(11, 15, 26, 0.6); backdrop-filter: blur(24px); border-bottom: 1px solid #1f2937; z-index: 50; }
nav .bar { max-width: 80rem; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; height: 4rem; padding: 0 1rem; }
nav a { color: #9ca3af; text-decoration: none; padding: 0.5rem 1rem; border-radius: 0.5rem; }
nav a:hover { color: #e6e9f0; background: rgba(255, 255, 255, 0.05); }
nav .brand { font-size: 1.5rem; font-weight: 700; color: #38bdf8; }
section { padding: 8rem 1rem; max-width: 80rem; margin: 0 auto; }
.muted { color: #9ca3af; }
.card { background: #111827; border: 1px solid #1f2937; border-radius: 1rem; padding: 2rem; margin: 1rem 0; transition: transform 0.2s, border-color 0.2s; }
.card:hover { transform: translateY(-0.25rem); border-color: #38bdf8; }
.chip { display: inline-block; padding: 0.25rem 0.75rem; margin: 0.25rem; border-radius: 9999px; border: 1px solid rgba(56, 189, 248, 0.3); font-size: 0.875rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem; }
"#;

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn accent_color(accent: Accent) -> &'static str {
    match accent {
        Accent::Primary => "#38bdf8",
        Accent::Accent => "#a78bfa",
        Accent::Cyan => "#06b6d4",
        Accent::Purple => "#a855f7",
        Accent::Green => "#22c55e",
        Accent::Orange => "#f97316",
        Accent::Blue => "#3b82f6",
    }
}

fn head(out: &mut String, portfolio: &Portfolio) {
    let meta = &portfolio.metadata;

    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, maximum-scale=5\">\n",
    );
    out.push_str(&format!("<title>{}</title>\n", escape(&meta.title)));
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(&meta.description)
    ));
    if !meta.keywords.is_empty() {
        out.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape(&meta.keywords.join(", "))
        ));
    }
    out.push_str(&format!(
        "<meta name=\"author\" content=\"{}\">\n",
        escape(&meta.author)
    ));
    out.push_str("<meta name=\"robots\" content=\"index, follow\">\n");

    let open_graph = [
        ("og:type", "website"),
        ("og:locale", meta.locale.as_str()),
        ("og:url", meta.url.as_str()),
        ("og:site_name", meta.site_name.as_str()),
        ("og:title", meta.title.as_str()),
        ("og:description", meta.description.as_str()),
    ];
    for (property, content) in open_graph {
        out.push_str(&format!(
            "<meta property=\"{}\" content=\"{}\">\n",
            property,
            escape(content)
        ));
    }

    out.push_str(&format!("<style>{}</style>\n</head>\n", STYLE));
}

fn nav(out: &mut String, portfolio: &Portfolio, anchors: &[SectionId]) {
    out.push_str("<nav>\n<div class=\"bar\">\n");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"#home\">{}</a>\n<div>\n",
        escape(&portfolio.profile.brand)
    ));
    for section in anchors {
        out.push_str(&format!(
            "<a href=\"#{}\">{}</a>\n",
            section.as_str(),
            section.title()
        ));
    }
    out.push_str("</div>\n</div>\n</nav>\n");
}

fn hero(out: &mut String, portfolio: &Portfolio, anchors: &[SectionId]) {
    let profile = &portfolio.profile;

    out.push_str("<section id=\"home\">\n");
    out.push_str(&format!(
        "<p class=\"muted\">{}</p>\n<h1>{}<br>{}</h1>\n",
        escape(&profile.eyebrow),
        escape(&profile.greeting),
        escape(&profile.name)
    ));
    out.push_str(&format!(
        "<p class=\"muted\">{}</p>\n<p class=\"muted\">{}</p>\n",
        escape(&profile.tagline),
        escape(&profile.summary)
    ));
    if anchors.contains(&SectionId::Projects) {
        out.push_str("<a class=\"chip\" href=\"#projects\">View My Work →</a>\n");
    }
    out.push_str("<a class=\"chip\" href=\"#contact\">Contact Me</a>\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" width=\"320\" height=\"320\">\n",
        escape(&profile.image.path),
        escape(&profile.image.alt)
    ));
    out.push_str("</section>\n");
}

fn about(out: &mut String, portfolio: &Portfolio) {
    let about = &portfolio.about;

    out.push_str(&format!(
        "<section id=\"about\">\n<h2>{}</h2>\n",
        escape(&about.heading)
    ));
    for paragraph in &about.paragraphs {
        out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(paragraph)));
    }

    if !about.journey.is_empty() {
        out.push_str("<h3>My Journey</h3>\n<ul>\n");
        for milestone in &about.journey {
            out.push_str(&format!(
                "<li><strong>{}</strong> <span class=\"muted\">{}</span></li>\n",
                escape(&milestone.title),
                escape(&milestone.detail)
            ));
        }
        out.push_str("</ul>\n");
    }

    for education in &about.education {
        out.push_str(&format!(
            "<div class=\"card\">\n<h3>{} {}</h3>\n<p>{}</p>\n",
            escape(&education.icon),
            escape(&education.degree),
            escape(&education.institution)
        ));
        if let Some(period) = &education.period {
            out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(period)));
        }
        if !education.facts.is_empty() {
            out.push_str("<dl>\n");
            for fact in &education.facts {
                out.push_str(&format!(
                    "<dt class=\"muted\">{}</dt><dd>{}</dd>\n",
                    escape(&fact.label),
                    escape(&fact.value)
                ));
            }
            out.push_str("</dl>\n");
        }
        out.push_str("</div>\n");
    }

    if !about.stats.is_empty() {
        out.push_str("<div class=\"grid\">\n");
        for stat in &about.stats {
            out.push_str(&format!(
                "<div class=\"card\"><strong style=\"color: {}\">{}</strong><p class=\"muted\">{}</p></div>\n",
                accent_color(stat.accent),
                escape(&stat.value),
                escape(&stat.label)
            ));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
}

fn skills(out: &mut String, portfolio: &Portfolio) {
    let skills = &portfolio.skills;
    if skills.groups.is_empty() {
        return;
    }

    // Not a navigation target, so no id
    out.push_str(&format!(
        "<section>\n<h2>{}</h2>\n<div class=\"grid\">\n",
        escape(&skills.heading)
    ));
    for group in &skills.groups {
        out.push_str(&format!(
            "<div class=\"card\" style=\"border-top: 3px solid {}\">\n<h3>{} {}</h3>\n<div>",
            accent_color(group.accent),
            escape(&group.icon),
            escape(&group.title)
        ));
        for skill in &group.skills {
            out.push_str(&format!("<span class=\"chip\">{}</span>", escape(skill)));
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n</section>\n");
}

fn experience(out: &mut String, portfolio: &Portfolio) {
    let experience = &portfolio.experience;

    out.push_str(&format!(
        "<section id=\"experience\">\n<h2>{}</h2>\n<div class=\"grid\">\n",
        escape(&experience.heading)
    ));
    for entry in &experience.entries {
        out.push_str(&format!(
            "<div class=\"card\">\n<p style=\"color: {}\">{}</p>\n<h3>{} {}</h3>\n<p>{}</p>\n",
            accent_color(entry.accent),
            escape(&entry.category),
            escape(&entry.icon),
            escape(&entry.title),
            escape(&entry.subtitle)
        ));
        out.push_str(&format!(
            "<p class=\"muted\">{}</p>\n<p>{}</p>\n",
            escape(&entry.organization),
            escape(&entry.date)
        ));
        if let Some(description) = &entry.description {
            out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(description)));
        }
        if !entry.highlights.is_empty() {
            out.push_str("<ul>\n");
            for highlight in &entry.highlights {
                out.push_str(&format!("<li>✓ {}</li>\n", escape(highlight)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
}

fn projects(out: &mut String, portfolio: &Portfolio) {
    let projects = &portfolio.projects;

    out.push_str(&format!(
        "<section id=\"projects\">\n<h2>{}</h2>\n<div class=\"grid\">\n",
        escape(&projects.heading)
    ));
    for project in &projects.entries {
        out.push_str(&format!(
            "<div class=\"card\">\n<img src=\"/.jpg?height=300&amp;width=500&amp;query={}\" alt=\"{}\" width=\"100%\">\n",
            escape(&project.image_query),
            escape(&project.title)
        ));
        out.push_str(&format!(
            "<h3>{}</h3>\n<p class=\"muted\">{}</p>\n<span class=\"chip\">{}</span>\n</div>\n",
            escape(&project.title),
            escape(&project.description),
            escape(&project.status)
        ));
    }
    out.push_str("</div>\n");
    if let Some(note) = &projects.note {
        out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(note)));
    }
    out.push_str("<a class=\"chip\" href=\"#contact\">Want to discuss a project? Get in touch →</a>\n");
    out.push_str("</section>\n");
}

fn contact(out: &mut String, portfolio: &Portfolio) {
    let contact = &portfolio.contact;

    out.push_str(&format!(
        "<section id=\"contact\">\n<h2>{}</h2>\n<p class=\"muted\">{}</p>\n<div class=\"grid\">\n",
        escape(&contact.heading),
        escape(&contact.blurb)
    ));
    for card in &contact.cards {
        out.push_str(&format!(
            "<a class=\"card\" href=\"{}\"{}>\n<h3>{} {}</h3>\n<p class=\"muted\">{}</p>\n</a>\n",
            escape(&card.href),
            external_target(&card.href),
            escape(card.kind.icon()),
            escape(&card.label),
            escape(&card.value)
        ));
    }
    out.push_str("</div>\n<div>\n");
    for social in &contact.socials {
        out.push_str(&format!(
            "<a class=\"chip\" href=\"{}\"{}>{}</a>\n",
            escape(&social.href),
            external_target(&social.href),
            escape(&social.label)
        ));
    }
    out.push_str(&format!(
        "</div>\n<p class=\"muted\">{}</p>\n</section>\n",
        escape(&contact.footer)
    ));
}

fn external_target(href: &str) -> &'static str {
    if href.starts_with("http") {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    }
}

/// Render the whole page as a standalone HTML document.
pub fn render_html(portfolio: &Portfolio) -> String {
    let anchors = portfolio.anchors();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    head(&mut out, portfolio);
    out.push_str("<body>\n");
    nav(&mut out, portfolio, &anchors);

    hero(&mut out, portfolio, &anchors);
    about(&mut out, portfolio);
    skills(&mut out, portfolio);
    if anchors.contains(&SectionId::Experience) {
        experience(&mut out, portfolio);
    }
    if anchors.contains(&SectionId::Projects) {
        projects(&mut out, portfolio);
    }
    contact(&mut out, portfolio);

    out.push_str("</body>\n</html>\n");
    out
}

pub fn write_html(portfolio: &Portfolio, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let document = render_html(portfolio);
    fs::write(path, &document)?;

    info!(path = %path.display(), bytes = document.len(), "Portfolio exported");

    Ok(())
}
