use super::{Education, Job, PersonalInfo, Profile, Project, SkillCategory};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn skills(category: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.to_string(),
        skills: strings(items),
    }
}

pub(super) fn builtin() -> Profile {
    Profile {
        personal: PersonalInfo {
            name: "Kenneth Wan".to_string(),
            full_name: "Yee Ki Wan (Kenneth)".to_string(),
            role: "Data Scientist & AI Engineer".to_string(),
            headline: "Turning data into meaningful insights through AI, LLMs, and operational optimization."
                .to_string(),
            location: "Hong Kong / London".to_string(),
            email: "kenneth.wan@example.com".to_string(),
            linkedin: "https://linkedin.com/in/kennethwan".to_string(),
            github: "https://github.com/kennethwan".to_string(),
        },
        experience: vec![
            Job {
                title: "Associate Data Scientist".to_string(),
                company: "OOCL".to_string(),
                period: "September 2024 - Current".to_string(),
                description: Vec::new(),
                projects: vec![
                    Project {
                        title: "LLM-Based Workflow Automation".to_string(),
                        description: strings(&[
                            "Developed and deployed a Large Language Model (LLM) solution to parse unstructured data from emails, images, and tables.",
                            "Incorporated preprocessing pipelines to extract key information, automate database queries, and categorize content.",
                            "Implemented an embedding-based Retrieval-Augmented Generation (RAG) pipeline with Maximum Marginal Relevance (MMR) to enhance LLM accuracy.",
                            "Leveraged LangChain for scalable LLM application development and LangFuse for performance monitoring.",
                        ]),
                    },
                    Project {
                        title: "Copilot for Business Strategy and Knowledge Management".to_string(),
                        description: strings(&[
                            "Built a LangGraph-based LLM pipeline to extract and organize domain-specific knowledge from presentation slides.",
                            "Utilized GraphRAG to structure extracted knowledge, enhancing LLM outputs with relevant, context-specific information.",
                            "Designed a standalone knowledge base system with a Streamlit-based UI supported by PostgreSQL and Pgvector.",
                            "Implemented an MCP server for querying relevant data efficiently.",
                        ]),
                    },
                    Project {
                        title: "Operational Optimization".to_string(),
                        description: strings(&[
                            "Developed linear programming models to optimize operational planning processes, improving efficiency.",
                            "Maintained automated data preprocessing pipelines to clean and prepare historical data for analytical tasks.",
                            "Applied stochastic optimization techniques to address uncertainty in operational data, incorporating hard and soft constraints.",
                        ]),
                    },
                ],
                highlight: None,
            },
            Job {
                title: "Research Intern (AI Music)".to_string(),
                company: "Huawei".to_string(),
                period: "Feb 2023 - July 2023".to_string(),
                description: strings(&[
                    "Conducted in-depth research on music generation and music-related classification tasks.",
                    "Developed deep learning models for music classification using Stochastic Weight Averaging, mix-up, and gradient clipping, surpassing state-of-the-art benchmarks.",
                    "Contributed to the development of content generation algorithms.",
                ]),
                projects: Vec::new(),
                highlight: None,
            },
            Job {
                title: "QA Engineer Intern".to_string(),
                company: "Viu".to_string(),
                period: "Jun 2021 - Sep 2021".to_string(),
                description: strings(&[
                    "Conduct quality assurance (QA) on mobile applications / web pages to ensure data accuracy",
                    "Track and process data using various tools such as DBT, Databricks, DBeaver, and Spark",
                    "Query data from Redshift and S3 to extract insights and create reports",
                    "Build interactive Tableau dashboards to visualize and analyze data",
                    "Use Atlassian tools (Jira, Confluence, and BitBucket) for project management / collaboration",
                ]),
                projects: Vec::new(),
                highlight: Some("Job duty was mainly focused on Data Engineering".to_string()),
            },
        ],
        education: vec![
            Education {
                school: "Imperial College London".to_string(),
                degree: "MSc in Computing (AI and Machine Learning)".to_string(),
                period: "Sep 2023 - Sep 2024".to_string(),
                honors: strings(&["Graduated with Distinction"]),
                details: strings(&[
                    "MSc Project: Data mining medical records of cannabis therapy in the UK",
                ]),
            },
            Education {
                school: "The Chinese University of Hong Kong (CUHK)".to_string(),
                degree: "BSc in Computer Science".to_string(),
                period: "Aug 2019 - July 2023".to_string(),
                honors: strings(&[
                    "First Class Honours",
                    "Dean\u{2019}s List (2021-2022, 2022-2023)",
                ]),
                details: strings(&[
                    "Minor in Data Analytics and Informatics",
                    "Stream: Database and Information Systems",
                    "Final Year Project: Music Chord Detection",
                ]),
            },
        ],
        skills: vec![
            skills("Languages", &["Python", "JavaScript", "C", "Prolog", "SQL"]),
            skills(
                "AI & Data Science",
                &[
                    "PyTorch",
                    "Tensorflow 2",
                    "scikit-learn",
                    "LangChain",
                    "LangGraph",
                    "GraphRAG",
                    "Pandas",
                    "NumPy",
                    "Librosa",
                    "Matplotlib",
                    "Seaborn",
                ],
            ),
            skills(
                "Big Data & Database",
                &[
                    "PySpark",
                    "Spark SQL",
                    "Amazon Redshift",
                    "PostgreSQL",
                    "MongoDB",
                    "MySQL",
                    "Pgvector",
                ],
            ),
            skills(
                "ETL & Tools",
                &["Databricks", "dbt", "DBeaver", "Tableau", "Git", "Jira"],
            ),
            skills(
                "Web Development",
                &[
                    "React.js",
                    "Node.js",
                    "Express.js",
                    "Mongoose",
                    "Bootstrap",
                    "Tailwind CSS",
                ],
            ),
        ],
    }
}
