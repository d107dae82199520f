//! Canonical portfolio content.

use crate::types::{
    Certification, Education, Experience, Profile, Project, Skill, SkillCategory,
};

pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "k11-website",
            "K11 Software Solutions Platform",
            "A full-stack AI-driven web platform built with Next.js and Django REST Framework. \
             Designed to empower small businesses with intelligent automation, scalable software \
             solutions, and secure digital transformation tools.",
            &["Next.js", "Django", "AI-Driven", "Full-Stack"],
        )
        .with_website_url("https://k11softwaresolutions.com/")
        .with_github_url(
            "https://github.com/K11-Software-Solutions/k11softwaresolutions-platform",
        ),
        Project::new(
            "emotion-detection",
            "AI Emotion Detection System",
            "An intelligent web application leveraging computer vision and deep learning to \
             detect and classify human emotions in real-time. Developed with a focus on \
             end-to-end model deployment and interactive UX.",
            &["Python", "OpenCV", "TensorFlow", "AI"],
        )
        .with_github_url(
            "https://github.com/kavitaj11/AI_Based_EmotionDetection_WebApp_Development_And_Deployment",
        ),
        Project::new(
            "weoptimize-promptfoo",
            "WeOptimize.ai Assurance",
            "A dedicated AI model evaluation suite using Promptfoo. Implements systematic \
             testing, red teaming, and regression suites for LLMs to ensure reliability, \
             security, and output consistency.",
            &["Promptfoo", "AI Assurance", "LLM Testing", "Quality and AI Assurance Automation"],
        )
        .with_github_url("https://github.com/kavitaj11/weoptimize.ai_assurance_promptfoo"),
        Project::new(
            "llm-testing-hub",
            "LLM Testing Hub",
            "A practical research hub for LLM assurance—evaluation harnesses, regression \
             suites, red-teaming scenarios, and reliability scorecard for repeatable, \
             audit-ready testing.",
            &["Python", "LLM Eval", "Red Teaming", "Quality and AI Assurance Automation"],
        )
        .with_github_url("https://github.com/K11-Software-Solutions/llm-testing-hub"),
        Project::new(
            "selenium-framework",
            "Enterprise Test Automation (Selenium)",
            "Selenium + Java full-stack framework emphasizing modular design and repeatable \
             execution patterns, extended with AI-assisted self-healing and evaluation hooks.",
            &["Java", "Selenium", "AI Testing", "CI/CD"],
        )
        .with_github_url(
            "https://github.com/K11-Software-Solutions/k11TechLab-selenium-java-fullstack-framework",
        ),
        Project::new(
            "cucumber-bdd-framework",
            "Enterprise Test Automation (BDD)",
            "Cucumber BDD framework for scalable automation across UI + API + Mobile Apps \
             workflows, built for CI/CD and long-term maintainability.",
            &["Java", "Cucumber", "Appium", "BDD"],
        )
        .with_github_url(
            "https://github.com/K11-Software-Solutions/k11TechLab-cucumber-bdd-java-fullstack-framework",
        ),
        Project::new(
            "fullstack-capstone",
            "Capstone Full-Stack Project",
            "A comprehensive full-stack capstone application demonstrating mastery of \
             end-to-end web architecture, featuring complex data relationships and secure \
             authentication.",
            &["Full-Stack", "React", "Node.js", "SQL"],
        )
        .with_github_url("https://github.com/kavitaj11/xrwvm-fullstack_developer_capstone"),
        Project::new(
            "travel-weather-forecast",
            "Euro-Orbit Travel Weather",
            "A specialized 7-day weather forecasting application designed for travel agency \
             logistics, integrating real-time meteorological data with itinerary planning.",
            &["React", "API Integration", "UX Design", "Weather"],
        )
        .with_github_url(
            "https://github.com/kavitaj11/euro-orbit-travel-agency-7-day-weather-forecast-app",
        ),
        Project::new(
            "rumi-press-tracker",
            "Rumi Press Expense Tracker",
            "A robust Django-powered financial management system for book distribution \
             logistics, featuring expense categorization, distribution reporting, and data \
             visualization.",
            &["Django", "Python", "FinTech", "Database"],
        )
        .with_github_url(
            "https://github.com/kavitaj11/django_based_rumi_press_book_distribution_expense_tracker",
        ),
        Project::new(
            "react-apps-repo",
            "React Development Lab",
            "A deep-dive collection of React applications exploring advanced state management, \
             component architecture patterns, and high-performance frontend hooks.",
            &["React", "Advanced JS", "Frontend Lab", "State"],
        )
        .with_github_url("https://github.com/kavitaj11/Developing-Front-End-Apps-With-React"),
        Project::new(
            "apollonia-crud",
            "Apollonia Dental System",
            "Full-stack employee management CRUD application demonstrating end-to-end delivery, \
             secure state management, and professional UX.",
            &["React", "Node.js", "CRUD", "Full-Stack"],
        )
        .with_github_url(
            "https://github.com/kavitaj11/apollonia-dental-practice-employee-management-system-CRUD-web-app",
        ),
        Project::new(
            "greenspot-db",
            "Greenspot Grocer DB",
            "Data modeling + normalization + scalable DB design project transforming flat \
             datasets into optimized relational structures for high-performance inventory \
             tracking.",
            &["SQL", "DB Design", "Relational", "Normalization"],
        )
        .with_github_url(
            "https://github.com/kavitaj11/greenspot-grocery-portfolio-database-project",
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    use SkillCategory::{Ai, Backend, Frontend, QualityAssurance};

    vec![
        Skill::new("React / Next.js", 92, Frontend),
        Skill::new("TypeScript", 92, Frontend),
        Skill::new("JavaScript", 95, Frontend),
        Skill::new("Node.js / Express", 88, Backend),
        Skill::new("Python / Java", 94, Backend),
        Skill::new("Django / REST Framework", 92, Backend),
        Skill::new("Microservices", 82, Backend),
        Skill::new("Generative AI / LLMs", 95, Ai),
        Skill::new("GitHub Copilot", 96, Ai),
        Skill::new("RAG & AI Agents", 88, Ai),
        Skill::new("Prompt Engineering", 95, Ai),
        Skill::new("Selenium / Playwright", 98, QualityAssurance),
        Skill::new("Cucumber / BDD", 96, QualityAssurance),
        Skill::new("REST Assured", 94, QualityAssurance),
        Skill::new("Appium", 90, QualityAssurance),
        Skill::new("TestNG / JUnit", 95, QualityAssurance),
        Skill::new("Promptfoo / DeepEval", 92, QualityAssurance),
        Skill::new("LangTest", 90, QualityAssurance),
        Skill::new("UFT Developer", 85, QualityAssurance),
        Skill::new("CI/CD & Kubernetes", 85, QualityAssurance),
    ]
}

pub fn certifications() -> Vec<Certification> {
    vec![
        Certification::new(
            "ai-llm-testing",
            "AI & LLM Testing",
            "Engenious University",
            "Aug 2025",
        ),
        Certification::new(
            "ai-dev-cert",
            "AI Developer Professional Certificate",
            "Coursera",
            "March 2025",
        ),
        Certification::new(
            "ibm-fullstack",
            "IBM Full Stack Software Developer Professional Certificate",
            "IBM (Coursera)",
            "Nov 2025",
        ),
        Certification::new(
            "google-python",
            "Google IT Automation with Python",
            "Google (Coursera)",
            "Feb 2021",
        ),
        Certification::new(
            "scjp",
            "SCJP: Sun Certified Java Programmer (Java 2 Platform 1.4)",
            "Sun Microsystems",
            "June 2005",
        ),
    ]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        id: "be-entc".to_string(),
        degree: "Bachelor of Engineering in Electronics and Telecommunication".to_string(),
        institution: "University of Mumbai, India".to_string(),
        period: "Year 2004".to_string(),
        details: Some(
            "Graduated with a focus on electronic circuits, telecommunication systems, and \
             engineering fundamentals."
                .to_string(),
        ),
    }]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience::new(
            "Founder / Technical Director",
            "K11 Software Solutions",
            "Feb 2024 – Present",
            "Leading AI/LLM integration strategies and automated DevOps pipelines. Spearheading \
             AI Assurance protocols using Promptfoo and DeepEval for Fortune 500 clients.",
            &["AI Agents", "LLM Reliability", "Promptfoo", "Python", "RAG"],
        ),
        Experience::new(
            "Senior Consultant",
            "Tata Consultancy Services (Verizon)",
            "Apr 2025 – Jan 2026",
            "Architecting Network Assurance Infrastructure for iEN services. Implementing \
             high-fidelity simulation environments for mission-critical network reliability.",
            &["Java", "Serenity BDD", "Network Topology", "CI/CD"],
        ),
        Experience::new(
            "Lead Software Engineer",
            "Broadcom (VMware)",
            "Oct 2021 – Jan 2024",
            "Engineered high-scale SaaS Subscription Commerce platforms. Modernized legacy \
             architectures resulting in significant performance gains and cost reduction.",
            &["Node.js", "Salesforce CPQ", "SAP Integration", "Microservices"],
        ),
        Experience::new(
            "Lead Automation Developer",
            "Cognizant (ETRADE)",
            "Jun 2019 – Sep 2021",
            "Technical lead for Equity Edge digital transformation. Built massive scale BDD \
             frameworks supporting 2000+ high-concurrency scenarios.",
            &["Selenium", "Java", "SQL", "Equity Systems"],
        ),
    ]
}

pub fn profile() -> Profile {
    Profile {
        projects: projects(),
        skills: skills(),
        certifications: certifications(),
        education: education(),
        experience: experience(),
    }
}
