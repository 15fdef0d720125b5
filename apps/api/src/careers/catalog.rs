//! Static career catalog. Entry order is the authored priority and breaks score ties.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogStep {
    pub title: &'static str,
    pub description: &'static str,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub salary_range: &'static str,
    pub growth_outlook: &'static str,
    pub demand_level: &'static str,
    pub experience_level: &'static str,
    pub career_path: &'static [CatalogStep],
}

const fn step(
    title: &'static str,
    description: &'static str,
    timeframe: &'static str,
) -> CatalogStep {
    CatalogStep {
        title,
        description,
        timeframe,
    }
}

pub fn career_catalog() -> &'static [CatalogEntry] {
    CAREER_CATALOG
}

static CAREER_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Software Engineer",
        description: "Design, develop, and maintain software applications and systems. \
            Work with various programming languages and frameworks to build scalable solutions.",
        required_skills: &[
            "JavaScript",
            "Python",
            "React",
            "Git",
            "Problem Solving",
            "Teamwork",
        ],
        salary_range: "$85,000 - $130,000",
        growth_outlook: "Excellent (+22%)",
        demand_level: "Very High",
        experience_level: "Entry to Mid",
        career_path: &[
            step("Junior Developer", "Learn fundamentals and work on small features", "0-2 years"),
            step(
                "Software Engineer",
                "Develop full features and contribute to architecture",
                "2-4 years",
            ),
            step("Senior Engineer", "Lead projects and mentor junior developers", "4-7 years"),
            step("Tech Lead", "Guide technical decisions and manage teams", "7+ years"),
        ],
    },
    CatalogEntry {
        title: "Data Scientist",
        description: "Analyze complex data to extract insights and build predictive models. \
            Use statistical methods and machine learning to solve business problems.",
        required_skills: &[
            "Python",
            "Machine Learning",
            "Statistics",
            "SQL",
            "Data Visualization",
            "Critical Thinking",
        ],
        salary_range: "$95,000 - $150,000",
        growth_outlook: "Excellent (+35%)",
        demand_level: "Very High",
        experience_level: "Entry to Mid",
        career_path: &[
            step("Data Analyst", "Basic data analysis and reporting", "0-2 years"),
            step("Data Scientist", "Build models and extract insights", "2-5 years"),
            step("Senior Data Scientist", "Lead data science projects", "5-8 years"),
            step("Principal Data Scientist", "Define data strategy and architecture", "8+ years"),
        ],
    },
    CatalogEntry {
        title: "Full Stack Developer",
        description: "Work on both frontend and backend development. \
            Build complete web applications from user interface to database.",
        required_skills: &[
            "JavaScript",
            "React",
            "Node.js",
            "HTML",
            "CSS",
            "Database Design",
            "Problem Solving",
        ],
        salary_range: "$80,000 - $125,000",
        growth_outlook: "Very Good (+15%)",
        demand_level: "High",
        experience_level: "Entry to Senior",
        career_path: &[
            step(
                "Junior Full Stack Developer",
                "Learn both frontend and backend basics",
                "0-2 years",
            ),
            step("Full Stack Developer", "Build complete applications", "2-4 years"),
            step("Senior Full Stack Developer", "Architect complex applications", "4-7 years"),
            step("Full Stack Architect", "Design system architecture", "7+ years"),
        ],
    },
    CatalogEntry {
        title: "Product Manager",
        description: "Guide product development from conception to launch. \
            Work with cross-functional teams to define requirements and strategy.",
        required_skills: &[
            "Communication",
            "Project Management",
            "User Research",
            "Data Analysis",
            "Leadership",
            "Strategic Thinking",
        ],
        salary_range: "$90,000 - $140,000",
        growth_outlook: "Good (+10%)",
        demand_level: "High",
        experience_level: "Mid to Senior",
        career_path: &[
            step(
                "Associate Product Manager",
                "Support senior PMs on product features",
                "0-2 years",
            ),
            step("Product Manager", "Own product features and roadmap", "2-5 years"),
            step(
                "Senior Product Manager",
                "Lead multiple products or complex features",
                "5-8 years",
            ),
            step("Director of Product", "Manage product strategy and teams", "8+ years"),
        ],
    },
    CatalogEntry {
        title: "UX Designer",
        description: "Design user experiences for digital products. \
            Research user needs and create intuitive, accessible interfaces.",
        required_skills: &[
            "Design Thinking",
            "User Research",
            "Prototyping",
            "Communication",
            "Creativity",
            "Empathy",
        ],
        salary_range: "$75,000 - $120,000",
        growth_outlook: "Good (+8%)",
        demand_level: "Moderate",
        experience_level: "Entry to Senior",
        career_path: &[
            step("Junior UX Designer", "Create wireframes and basic prototypes", "0-2 years"),
            step("UX Designer", "Own end-to-end design process", "2-4 years"),
            step("Senior UX Designer", "Lead design projects and mentor juniors", "4-7 years"),
            step("UX Design Lead", "Define design strategy and standards", "7+ years"),
        ],
    },
    CatalogEntry {
        title: "DevOps Engineer",
        description: "Bridge development and operations teams. \
            Automate deployment pipelines and manage cloud infrastructure.",
        required_skills: &[
            "Linux",
            "Docker",
            "Kubernetes",
            "Cloud Platforms",
            "Python",
            "Automation",
            "Problem Solving",
        ],
        salary_range: "$90,000 - $135,000",
        growth_outlook: "Excellent (+20%)",
        demand_level: "Very High",
        experience_level: "Mid to Senior",
        career_path: &[
            step("Junior DevOps Engineer", "Learn infrastructure basics and tooling", "0-2 years"),
            step("DevOps Engineer", "Manage CI/CD and cloud infrastructure", "2-5 years"),
            step("Senior DevOps Engineer", "Architect deployment strategies", "5-8 years"),
            step("DevOps Manager", "Lead infrastructure and platform teams", "8+ years"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_titles_unique() {
        let titles: HashSet<&str> = career_catalog().iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), career_catalog().len());
    }

    #[test]
    fn test_every_career_has_skills_and_path() {
        for career in career_catalog() {
            assert!(!career.required_skills.is_empty(), "{}", career.title);
            assert!(!career.career_path.is_empty(), "{}", career.title);
        }
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let value = serde_json::to_value(career_catalog()[0]).unwrap();
        assert!(value.get("requiredSkills").is_some());
        assert!(value.get("careerPath").is_some());
        assert_eq!(value["careerPath"][0]["timeframe"], "0-2 years");
    }
}
