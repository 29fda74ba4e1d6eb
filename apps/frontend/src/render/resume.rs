//! Resume rendering: `ResumeData` → HTML fragment.
//!
//! Sections appear in a fixed order and only when they have content. Within a
//! section, entries keep the order the collaborator sent them in, and every
//! optional field is emitted only when present and non-blank.

use crate::models::resume::{
    Certification, ContactInfo, Education, Language, Project, ResumeData, Skill, WorkExperience,
};
use crate::render::html::Element;

pub const EMPTY_RESUME_NOTICE: &str = "No resume data could be extracted.";

/// Renders the whole payload. Pure: the same payload always yields the same markup.
pub fn render_resume(data: &ResumeData) -> String {
    let sections: Vec<Element> = [
        personal_section(data),
        summary_section(data),
        list_section("Education", "education", &data.education, education_entry),
        list_section(
            "Work Experience",
            "work-experience",
            &data.work_experience,
            work_entry,
        ),
        skills_section(&data.skills),
        list_section("Projects", "projects", &data.projects, project_entry),
        list_section(
            "Certifications",
            "certifications",
            &data.certifications,
            certification_entry,
        ),
        languages_section(&data.languages),
        string_list_section("Awards", "awards", &data.awards),
        string_list_section("Publications", "publications", &data.publications),
        list_section(
            "Volunteer Experience",
            "volunteer-experience",
            &data.volunteer_experience,
            work_entry,
        ),
        interests_section(&data.interests),
    ]
    .into_iter()
    .flatten()
    .collect();

    let root = Element::new("div").class("resume-data");
    if sections.is_empty() {
        return root
            .child(Element::new("p").class("empty").text(EMPTY_RESUME_NOTICE))
            .render();
    }

    root.children(sections).optional(metadata_footer(data)).render()
}

/// Joins a date range with `" - "`, dropping absent sides; `None` when both are absent.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (present(start), present(end)) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.and_then(non_blank)
}

fn section(title: &str, key: &str) -> Element {
    Element::new("div")
        .class(format!("resume-section {key}"))
        .child(Element::new("h3").text(title))
}

fn list_section<T>(
    title: &str,
    key: &str,
    entries: &[T],
    render_entry: fn(&T) -> Element,
) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    Some(section(title, key).children(entries.iter().map(render_entry)))
}

fn string_list_section(title: &str, key: &str, items: &[String]) -> Option<Element> {
    let items: Vec<&str> = items.iter().filter_map(|i| non_blank(i)).collect();
    if items.is_empty() {
        return None;
    }
    Some(section(title, key).child(bullet_list(&items)))
}

fn bullet_list(items: &[&str]) -> Element {
    Element::new("ul").children(items.iter().map(|i| Element::new("li").text(*i)))
}

/// `<p><strong>Label:</strong> value</p>`, or nothing when the value is absent.
fn labelled(label: &str, value: Option<&str>) -> Option<Element> {
    present(value).map(|v| {
        Element::new("p")
            .child(Element::new("strong").text(format!("{label}:")))
            .text(format!(" {v}"))
    })
}

fn line(class: &str, value: Option<&str>) -> Option<Element> {
    present(value).map(|v| Element::new("p").class(class.to_string()).text(v))
}

fn heading(value: &str) -> Option<Element> {
    non_blank(value).map(|v| Element::new("h4").text(v))
}

fn dates(start: Option<&str>, end: Option<&str>) -> Option<Element> {
    date_range(start, end).map(|r| Element::new("p").class("dates").text(r))
}

/// Links only for http(s) targets; anything else is shown as plain text.
fn link(label: &str, url: Option<&str>) -> Option<Element> {
    let url = present(url)?;
    let lower = url.to_ascii_lowercase();
    let target = if lower.starts_with("http://") || lower.starts_with("https://") {
        Element::new("a")
            .attr("href", url)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .text(url)
    } else {
        Element::new("span").text(url)
    };
    Some(
        Element::new("p")
            .child(Element::new("strong").text(format!("{label}:")))
            .text(" ")
            .child(target),
    )
}

fn technologies(items: &[String]) -> Option<Element> {
    let items: Vec<&str> = items.iter().filter_map(|i| non_blank(i)).collect();
    if items.is_empty() {
        return None;
    }
    labelled("Technologies", Some(items.join(", ").as_str()))
}

fn personal_section(data: &ResumeData) -> Option<Element> {
    let name = present(data.full_name.as_deref());
    let contacts: Vec<&ContactInfo> = data
        .contact_info
        .iter()
        .filter(|c| non_blank(&c.value).is_some())
        .collect();
    if name.is_none() && contacts.is_empty() {
        return None;
    }

    let mut el = section("Personal Information", "personal-info").optional(labelled("Name", name));
    if !contacts.is_empty() {
        el = el.child(Element::new("ul").class("contact-info").children(
            contacts.into_iter().map(|c| {
                let item = Element::new("li").class(format!("contact {}", c.kind.as_str()));
                match present(c.label.as_deref()) {
                    Some(label) => item.text(format!("{label}: {}", c.value.trim())),
                    None => item.text(c.value.trim()),
                }
            }),
        ));
    }
    Some(el)
}

fn summary_section(data: &ResumeData) -> Option<Element> {
    let summary = line("summary", data.summary.as_deref());
    let objective = labelled("Objective", data.objective.as_deref());
    if summary.is_none() && objective.is_none() {
        return None;
    }
    Some(section("Summary", "summary").optional(summary).optional(objective))
}

fn education_entry(edu: &Education) -> Element {
    let degree = match (non_blank(&edu.degree), present(edu.field_of_study.as_deref())) {
        (Some(d), Some(f)) => Some(format!("{d} in {f}")),
        (Some(d), None) => Some(d.to_string()),
        (None, Some(f)) => Some(f.to_string()),
        (None, None) => None,
    };
    Element::new("div")
        .class("entry")
        .optional(heading(&edu.institution))
        .optional(line("degree", degree.as_deref()))
        .optional(dates(edu.start_date.as_deref(), edu.end_date.as_deref()))
        .optional(line("location", edu.location.as_deref()))
        .optional(labelled("GPA", edu.gpa.map(|g| g.to_string()).as_deref()))
        .optional(line("description", edu.description.as_deref()))
}

fn work_entry(work: &WorkExperience) -> Element {
    let end = match present(work.end_date.as_deref()) {
        Some(e) => Some(e),
        None if work.current => Some("Present"),
        None => None,
    };
    let achievements: Vec<&str> = work
        .achievements
        .iter()
        .filter_map(|a| non_blank(a))
        .collect();

    Element::new("div")
        .class("entry")
        .optional(heading(&work.position))
        .optional(line("company", Some(work.company.as_str())))
        .optional(dates(work.start_date.as_deref(), end))
        .optional(line("location", work.location.as_deref()))
        .optional(line("description", work.description.as_deref()))
        .optional((!achievements.is_empty()).then(|| bullet_list(&achievements)))
        .optional(technologies(&work.technologies))
}

fn skills_section(skills: &[Skill]) -> Option<Element> {
    let items: Vec<Element> = skills
        .iter()
        .filter_map(|s| {
            let name = non_blank(&s.name)?;
            let mut text = name.to_string();
            if let Some(category) = present(s.category.as_deref()) {
                text.push_str(&format!(" ({category})"));
            }
            if let Some(level) = present(s.proficiency.as_deref()) {
                text.push_str(&format!(" - {level}"));
            }
            Some(Element::new("li").class("skill").text(text))
        })
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(section("Skills", "skills").child(Element::new("ul").class("skills-list").children(items)))
}

fn project_entry(project: &Project) -> Element {
    Element::new("div")
        .class("entry")
        .optional(heading(&project.name))
        .optional(line("description", Some(project.description.as_str())))
        .optional(dates(
            project.start_date.as_deref(),
            project.end_date.as_deref(),
        ))
        .optional(technologies(&project.technologies))
        .optional(link("URL", project.url.as_deref()))
        .optional(link("GitHub", project.github_url.as_deref()))
}

fn certification_entry(cert: &Certification) -> Element {
    Element::new("div")
        .class("entry")
        .optional(heading(&cert.name))
        .optional(line("issuer", Some(cert.issuer.as_str())))
        .optional(dates(
            cert.issue_date.as_deref(),
            cert.expiry_date.as_deref(),
        ))
        .optional(labelled("Credential ID", cert.credential_id.as_deref()))
        .optional(link("URL", cert.url.as_deref()))
}

fn languages_section(languages: &[Language]) -> Option<Element> {
    let items: Vec<Element> = languages
        .iter()
        .filter_map(|l| {
            let name = non_blank(&l.name)?;
            let text = match present(l.proficiency.as_deref()) {
                Some(level) => format!("{name} - {level}"),
                None => name.to_string(),
            };
            Some(Element::new("li").class("language").text(text))
        })
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(section("Languages", "languages").child(Element::new("ul").children(items)))
}

fn interests_section(interests: &[String]) -> Option<Element> {
    let items: Vec<&str> = interests.iter().filter_map(|i| non_blank(i)).collect();
    if items.is_empty() {
        return None;
    }
    Some(section("Interests", "interests").child(Element::new("p").text(items.join(", "))))
}

fn metadata_footer(data: &ResumeData) -> Option<Element> {
    let confidence = data.parsing_confidence.map(|c| {
        let pct = if (0.0..=1.0).contains(&c) { c * 100.0 } else { c };
        format!("{pct:.0}%")
    });
    let footer = Element::new("div")
        .class("resume-meta")
        .optional(labelled("Source file", data.file_name.as_deref()))
        .optional(labelled("Parsed on", data.parsed_date.as_deref()))
        .optional(labelled("Parsing confidence", confidence.as_deref()));
    (!footer.is_empty()).then_some(footer)
}
