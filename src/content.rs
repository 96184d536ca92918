//! Static page content. Everything the sections render lives here.

use crate::components::skill_network::SkillCatalog;

pub struct SocialLinks {
	pub github: &'static str,
	pub linkedin: &'static str,
	pub email: &'static str,
	pub location: &'static str,
}

pub struct Education {
	pub school: &'static str,
	pub location: &'static str,
	pub degree: &'static str,
	pub period: &'static str,
	pub grade: Option<&'static str>,
	pub coursework: Option<&'static str>,
}

pub struct Project {
	pub title: &'static str,
	pub icon: &'static str,
	pub tags: &'static [&'static str],
	pub description: &'static [&'static str],
	pub repo: &'static str,
}

pub struct Certification {
	pub name: &'static str,
	pub issuer: &'static str,
	pub year: &'static str,
}

pub struct SkillGroup {
	pub category: &'static str,
	pub items: &'static [&'static str],
}

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_INITIALS: &str = "AM";
pub const TAGLINE: &str = "AI & ML Engineer · Generative AI, Deep Learning & LLMs";

pub const SOCIAL_LINKS: SocialLinks = SocialLinks {
	github: "https://github.com/",
	linkedin: "https://www.linkedin.com/",
	email: "hello@example.com",
	location: "Boston, MA",
};

pub const BIO: &[&str] = &[
	"I got into AI by asking how far a machine can go in understanding the world. That question turned into building systems across deep learning, NLP, generative models and LLMs that solve concrete problems.",
	"I like models that learn, adapt and surface patterns people would miss, and I spend most of my time experimenting with new architectures and pushing them into real products.",
	"Today I focus on AI that is capable and human-centered: systems that perform well and make a visible difference to the people who use them.",
];

pub const MOTTO: &str = "Turning curiosity into code and ideas into intelligent systems.";

pub const EDUCATION: &[Education] = &[
	Education {
		school: "Northeastern University",
		location: "Boston, MA",
		degree: "M.S. Artificial Intelligence",
		period: "2025 – 2026",
		grade: None,
		coursework: Some("Deep Learning, NLP, Generative AI, LLMs, AI Algorithms"),
	},
	Education {
		school: "University at Buffalo",
		location: "Buffalo, NY",
		degree: "Graduate study, Artificial Intelligence",
		period: "2024",
		grade: None,
		coursework: Some("Big Data, ML, Vector Databases, Foundations of AI"),
	},
	Education {
		school: "College of Engineering & Technology",
		location: "Hyderabad, India",
		degree: "B.E. Computer Science (AI & Data Science)",
		period: "2020 – 2024",
		grade: Some("First Class Honours"),
		coursework: None,
	},
];

pub const PROJECTS: &[Project] = &[
	Project {
		title: "ContraBERT",
		icon: "🔬",
		tags: &["BERT", "NLP", "Deep Learning"],
		description: &[
			"Replaced BERT's next-sentence objective with a contrastive triplet loss for better semantic similarity.",
			"Measured gains on MNLI benchmarks.",
		],
		repo: "#",
	},
	Project {
		title: "Drug Recommendation",
		icon: "💊",
		tags: &["Healthcare AI", "ML", "Research"],
		description: &[
			"ML-driven recommender mapping reported symptoms to candidate treatments.",
			"Evaluated across multiple disease categories.",
		],
		repo: "#",
	},
	Project {
		title: "Currency Classifier",
		icon: "🪙",
		tags: &["Computer Vision", "CNN", "TensorFlow"],
		description: &[
			"CNN classifier identifying currency notes from photographs.",
			"Augmentation, class balancing and architecture tuning for accuracy.",
		],
		repo: "#",
	},
	Project {
		title: "Image Retrieval System",
		icon: "🖼",
		tags: &["CV", "Feature Extraction", "Search"],
		description: &[
			"Content-based visual search built on extracted image features.",
			"Fast similarity retrieval over an image collection.",
		],
		repo: "#",
	},
];

pub const SKILLS_CORE: &[&str] = &[
	"Supervised/Unsupervised ML",
	"Generative AI, LLMs",
	"Prompt Engineering",
	"Recommender Systems",
	"TensorFlow, PyTorch, Keras",
	"CNNs, RNNs, Transformers",
	"NLTK, spaCy",
];

pub const SKILLS_PROGRAMMING: &[SkillGroup] = &[
	SkillGroup {
		category: "Languages",
		items: &["Python", "SQL", "C", "R", "JavaScript", "HTML/CSS"],
	},
	SkillGroup {
		category: "Data Analysis",
		items: &["Pandas", "NumPy", "Matplotlib", "Seaborn", "Power BI", "Tableau"],
	},
	SkillGroup {
		category: "Databases & Tools",
		items: &["MySQL", "MongoDB", "Hadoop", "Spark", "Hive"],
	},
];

pub const CERTIFICATIONS: &[Certification] = &[
	Certification {
		name: "Building RAG Agents with LLMs",
		issuer: "NVIDIA",
		year: "2025",
	},
	Certification {
		name: "AI Vector Search Certified Professional",
		issuer: "Oracle",
		year: "2025",
	},
	Certification {
		name: "Generative AI Fundamentals",
		issuer: "Databricks",
		year: "2025",
	},
	Certification {
		name: "Foundations of Prompt Engineering",
		issuer: "AWS",
		year: "2025",
	},
];

/// Skill lists in the shape the network builder expects. Missing programming
/// groups become empty categories.
pub fn skill_catalog() -> SkillCatalog {
	let group = |idx: usize| -> Vec<String> {
		SKILLS_PROGRAMMING
			.get(idx)
			.map(|g| g.items.iter().map(|s| s.to_string()).collect())
			.unwrap_or_default()
	};
	SkillCatalog {
		core: SKILLS_CORE.iter().map(|s| s.to_string()).collect(),
		languages: group(0),
		data_tools: group(1),
		big_data: group(2),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_mirrors_the_skill_tables() {
		let catalog = skill_catalog();
		assert_eq!(catalog.core.len(), 7);
		assert_eq!(
			(catalog.languages.len(), catalog.data_tools.len(), catalog.big_data.len()),
			(6, 6, 5)
		);
		assert_eq!(catalog.big_data.first().map(String::as_str), Some("MySQL"));
	}

	#[test]
	fn social_links_are_complete() {
		assert!(SOCIAL_LINKS.email.contains('@'));
		assert!(SOCIAL_LINKS.github.starts_with("https://"));
		assert!(SOCIAL_LINKS.linkedin.starts_with("https://"));
		assert!(!SOCIAL_LINKS.location.is_empty());
	}
}
