//! Lexicon-based skill extraction from free text (job postings, resumes).
//!
//! Each canonical skill has one or more aliases. A mention counts only when
//! the alias is bounded by non-alphanumeric characters, so "java" does not
//! fire inside "javascript".

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// (canonical name, aliases). Aliases are lowercase.
static SKILLS: &[(&str, &[&str])] = &[
    // Languages
    ("Python", &["python"]),
    ("JavaScript", &["javascript"]),
    ("TypeScript", &["typescript"]),
    ("Java", &["java"]),
    ("C++", &["c++", "cpp"]),
    ("C#", &["c#", "csharp"]),
    ("Go", &["golang"]),
    ("Rust", &["rust"]),
    ("Ruby", &["ruby"]),
    ("PHP", &["php"]),
    ("Swift", &["swift"]),
    ("Kotlin", &["kotlin"]),
    ("Scala", &["scala"]),
    ("SQL", &["sql"]),
    ("HTML", &["html", "html5"]),
    ("CSS", &["css", "css3"]),
    ("Bash", &["bash", "shell scripting"]),
    // Frameworks & libraries
    ("React", &["react", "reactjs", "react.js"]),
    ("Angular", &["angular", "angularjs"]),
    ("Vue", &["vue", "vuejs", "vue.js"]),
    ("Next.js", &["next.js", "nextjs"]),
    ("Node.js", &["node.js", "nodejs"]),
    ("Express", &["express.js", "expressjs"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("FastAPI", &["fastapi"]),
    ("Spring Boot", &["spring boot", "springboot"]),
    ("Ruby on Rails", &["ruby on rails", "rails"]),
    (".NET", &[".net", "dotnet", "asp.net"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("scikit-learn", &["scikit-learn", "sklearn"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("Spark", &["spark", "pyspark", "apache spark"]),
    ("Kafka", &["kafka", "apache kafka"]),
    ("GraphQL", &["graphql"]),
    // Tools & platforms
    ("Git", &["git"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("Terraform", &["terraform"]),
    ("Ansible", &["ansible"]),
    ("Jenkins", &["jenkins"]),
    ("GitHub Actions", &["github actions"]),
    ("AWS", &["aws", "amazon web services"]),
    ("Azure", &["azure"]),
    ("GCP", &["gcp", "google cloud"]),
    ("Linux", &["linux"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MySQL", &["mysql"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("Redis", &["redis"]),
    ("Elasticsearch", &["elasticsearch"]),
    ("Figma", &["figma"]),
    ("Tableau", &["tableau"]),
    ("Power BI", &["power bi", "powerbi"]),
    ("Excel", &["microsoft excel", "ms excel"]),
    ("Jira", &["jira"]),
    // Practices & domains
    ("Machine Learning", &["machine learning"]),
    ("Deep Learning", &["deep learning"]),
    ("Natural Language Processing", &["natural language processing", "nlp"]),
    ("Computer Vision", &["computer vision"]),
    ("Data Analysis", &["data analysis", "data analytics"]),
    ("Data Engineering", &["data engineering"]),
    ("Data Visualization", &["data visualization"]),
    ("Statistics", &["statistics", "statistical analysis"]),
    ("REST APIs", &["rest api", "rest apis", "restful"]),
    ("Microservices", &["microservices", "microservice"]),
    ("Distributed Systems", &["distributed systems"]),
    ("System Design", &["system design"]),
    ("CI/CD", &["ci/cd", "continuous integration", "continuous delivery"]),
    ("DevOps", &["devops"]),
    ("Unit Testing", &["unit testing", "unit tests", "tdd"]),
    ("Agile", &["agile", "scrum", "kanban"]),
    ("Cybersecurity", &["cybersecurity", "security"]),
    ("UI/UX Design", &["ui/ux", "ux design", "ui design", "user experience"]),
    // Soft skills
    ("Communication", &["communication"]),
    ("Leadership", &["leadership"]),
    ("Teamwork", &["teamwork", "collaboration"]),
    ("Problem Solving", &["problem solving", "problem-solving"]),
    ("Project Management", &["project management"]),
    ("Stakeholder Management", &["stakeholder management"]),
    ("Mentoring", &["mentoring", "mentorship"]),
];

const REQUIRED_MARKERS: &[&str] = &["required", "must have", "must-have", "you will need", "minimum"];
const OPTIONAL_MARKERS: &[&str] = &["preferred", "nice to have", "nice-to-have", "bonus", "a plus", "plus"];

/// alias → canonical, built once.
static ALIASES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut aliases: Vec<_> = SKILLS
        .iter()
        .flat_map(|(canonical, list)| list.iter().map(move |a| (*a, *canonical)))
        .collect();
    // Longer aliases claim their span first, so "ruby on rails" hides "ruby".
    aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    aliases
});

/// A skill found in free text, with the requirement signal of its sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSkill {
    pub name: String,
    /// Some(true) for "required" sentences, Some(false) for "preferred", None otherwise.
    pub required: Option<bool>,
    position: usize,
}

/// Returns true when `needle` occurs in `haystack` with non-alphanumeric boundaries.
/// Both arguments must already be lowercase.
pub fn mentions(haystack: &str, needle: &str) -> bool {
    find_bounded(haystack, needle).is_some()
}

fn find_bounded(haystack: &str, needle: &str) -> Option<usize> {
    find_bounded_from(haystack, needle, 0)
}

fn find_bounded_from(haystack: &str, needle: &str, mut from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(start);
        }
        // Advance by one char to stay on a UTF-8 boundary.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Every bounded occurrence of `needle`, as byte ranges.
fn bounded_spans<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if from > haystack.len() {
            return None;
        }
        let start = find_bounded_from(haystack, needle, from)?;
        let end = start + needle.len();
        from = end;
        Some((start, end))
    })
}

/// Extracts canonical skill names from text, ordered by first mention.
pub fn extract_skills(text: &str) -> Vec<String> {
    extract_skills_with_signals(text)
        .into_iter()
        .map(|s| s.name)
        .collect()
}

/// Like `extract_skills`, also tagging each skill with the required/preferred
/// signal of the sentence it first appears in.
pub fn extract_skills_with_signals(text: &str) -> Vec<ExtractedSkill> {
    let mut found: HashMap<&'static str, ExtractedSkill> = HashMap::new();
    let mut sentence_start = 0;

    for sentence in split_sentences(text) {
        let lower = sentence.to_lowercase();
        let signal = requirement_signal(&lower);

        let mut claimed: Vec<(usize, usize)> = Vec::new();

        for (alias, canonical) in ALIASES.iter() {
            for (start, end) in bounded_spans(&lower, alias) {
                if claimed.iter().any(|&(s, e)| start < e && s < end) {
                    continue;
                }
                claimed.push((start, end));

                let position = sentence_start + start;
                let entry = found.entry(*canonical).or_insert_with(|| ExtractedSkill {
                    name: canonical.to_string(),
                    required: signal,
                    position,
                });
                if position < entry.position {
                    entry.position = position;
                    entry.required = signal;
                }
            }
        }
        sentence_start += sentence.len() + 1;
    }

    let mut skills: Vec<ExtractedSkill> = found.into_values().collect();
    skills.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));
    skills
}

fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    // '.' is not a separator: it appears inside aliases like "node.js" and ".net".
    text.split(|c: char| matches!(c, '\n' | ';' | '!' | '?'))
}

fn requirement_signal(lower_sentence: &str) -> Option<bool> {
    if REQUIRED_MARKERS.iter().any(|m| mentions(lower_sentence, m)) {
        Some(true)
    } else if OPTIONAL_MARKERS.iter().any(|m| mentions(lower_sentence, m)) {
        Some(false)
    } else {
        None
    }
}
