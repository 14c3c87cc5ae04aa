//! The demo listing set served at startup.

use crate::models::listing::Listing;

struct SeedListing {
    id: u32,
    company: &'static str,
    role: &'static str,
    location: &'static str,
    stipend: &'static str,
    duration: &'static str,
    skills: &'static [&'static str],
    sector: &'static str,
    description: &'static str,
    requirements: &'static str,
    logo: &'static str,
}

const SEED: &[SeedListing] = &[
    SeedListing {
        id: 1,
        company: "TechCorp Solutions",
        role: "Machine Learning Intern",
        location: "Bangalore",
        stipend: "₹25,000/month",
        duration: "3 months",
        skills: &["Python", "Machine Learning", "TensorFlow", "Deep Learning"],
        sector: "Technology",
        description: "Work on AI models for recommendation systems and contribute to cutting-edge machine learning projects.",
        requirements: "B.Tech/M.Tech in CS/IT, Knowledge of Python and ML algorithms",
        logo: "https://via.placeholder.com/100x100/007bff/ffffff?text=TC",
    },
    SeedListing {
        id: 2,
        company: "WebDev Studios",
        role: "Frontend Developer Intern",
        location: "Mumbai",
        stipend: "₹20,000/month",
        duration: "4 months",
        skills: &["React.js", "JavaScript", "HTML", "CSS", "Node.js"],
        sector: "Technology",
        description: "Build responsive web applications using modern technologies and collaborate with design teams.",
        requirements: "Knowledge of React.js, JavaScript, and web development fundamentals",
        logo: "https://via.placeholder.com/100x100/28a745/ffffff?text=WD",
    },
    SeedListing {
        id: 3,
        company: "DataFlow Analytics",
        role: "Data Science Intern",
        location: "Hyderabad",
        stipend: "₹22,000/month",
        duration: "6 months",
        skills: &["Python", "Data Analysis", "SQL", "Pandas", "Numpy"],
        sector: "Analytics",
        description: "Analyze large datasets and create predictive models for business intelligence solutions.",
        requirements: "Statistics background, Python programming, SQL knowledge",
        logo: "https://via.placeholder.com/100x100/17a2b8/ffffff?text=DF",
    },
    SeedListing {
        id: 4,
        company: "CloudTech Innovations",
        role: "DevOps Intern",
        location: "Pune",
        stipend: "₹18,000/month",
        duration: "3 months",
        skills: &["AWS", "Docker", "Linux", "CI/CD", "Kubernetes"],
        sector: "Cloud Computing",
        description: "Learn cloud infrastructure and deployment automation with industry-standard tools.",
        requirements: "Basic Linux knowledge, Interest in cloud technologies",
        logo: "https://via.placeholder.com/100x100/6c757d/ffffff?text=CT",
    },
    SeedListing {
        id: 5,
        company: "FinTech Solutions",
        role: "Backend Developer Intern",
        location: "Chennai",
        stipend: "₹24,000/month",
        duration: "4 months",
        skills: &["Node.js", "MongoDB", "API Development", "Express.js"],
        sector: "Finance",
        description: "Develop secure APIs for financial applications and payment processing systems.",
        requirements: "Backend development experience, Database knowledge",
        logo: "https://via.placeholder.com/100x100/dc3545/ffffff?text=FS",
    },
];

/// Builds owned `Listing` records from the static seed, preserving order.
pub fn seed_listings() -> Vec<Listing> {
    SEED.iter()
        .map(|s| Listing {
            id: s.id,
            company: s.company.to_string(),
            role: s.role.to_string(),
            location: s.location.to_string(),
            stipend: s.stipend.to_string(),
            duration: s.duration.to_string(),
            skills: s.skills.iter().map(|k| k.to_string()).collect(),
            sector: s.sector.to_string(),
            description: s.description.to_string(),
            requirements: s.requirements.to_string(),
            logo: s.logo.to_string(),
        })
        .collect()
}
