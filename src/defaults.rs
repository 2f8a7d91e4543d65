//! Built-in portfolio catalog.
//!
//! Six topics describing a student developer's portfolio. Topic order and
//! synonym order here are load-bearing: "work" (projects) is checked before
//! "work experience" (experience), and "skills" (experience) before
//! "skillset" (tools).

use crate::catalog::TopicCatalog;
use crate::error::ValidationError;
use crate::topic::{Topic, TopicId};

/// Greeting returned by the intro endpoint.
pub const INTRO_MESSAGE: &str = "Hello! Welcome to my chatbot portfolio website. I'm here to assist you with any questions you have. Try asking about topics like 'projects', 'education', 'experience', 'personal details', 'tools', or 'experience'!";

/// Static liveness payload.
pub const HEALTH_MESSAGE: &str = "Service is up and running!";

const PROJECTS: &str = "I've had the privilege of working on some fascinating projects that reflect my technical skills and interests. \
For example, I developed a 2D dungeon crawler in Pygame, writing over 4,000 lines of Python code to create engaging gameplay mechanics. \
I then used this project as a baseline to teach younger students at my school how to make games in the Games Creators Club. \
Another highlight was my hackathon project, an educational space exploration website built using Three.js, where I contributed to interactive 3D visualizations \
and user-friendly interfaces, making the learning experience immersive and enjoyable. \
If you are seeing this, I am currently working on implementing links to my projects directly into my website however, I haven't quite finished yet. \
If you want to see my projects first hand, please visit my github: https://github.com/CharlieGEdmunds.";

const PROJECTS_DETAIL: &str = "Two projects stand out. The first is a 2D dungeon crawler written in Pygame: over 4,000 lines of Python building its gameplay mechanics, \
which later became the baseline I used to teach younger students how to make games in my school's Games Creators Club. \
The second is my hackathon project, an educational space exploration website built with Three.js, \
where my part was the interactive 3D visualizations and the user-friendly interface around them. \
Links to both are on their way to this site; until then the code is on my github: https://github.com/CharlieGEdmunds.";

const EDUCATION: &str = "I'm currently pursuing a BSc (Hons) in Computer Science at The University of Manchester, where I earned a First Class result (77%) in my first year. \
During my studies, I've led the frontend development of an award-winning AI-powered timetabling website and delved into a variety of subjects, \
including Machine Learning, Algorithms, Software Engineering, and Knowledge-Based AI.";

const EDUCATION_DETAIL: &str = "I'm studying for a BSc (Hons) in Computer Science at The University of Manchester, \
and my first year finished with a First Class result of 77%. \
Alongside coursework I led the frontend development of an AI-powered timetabling website, which went on to win an award. \
The subjects I've covered so far include Machine Learning, Algorithms, Software Engineering, and Knowledge-Based AI.";

const EXPERIENCE: &str = "My experience has been diverse and impactful. As a tutor, I've designed and led personalized lessons to help underrepresented students succeed in mathematics. \
In addition, I co-organize and facilitate game development workshops at UniCS, mentoring over 100 society members and nurturing their skills in game design and programming. \
These roles have honed my ability to collaborate, teach, and lead effectively.";

const EXPERIENCE_DETAIL: &str = "I have two main roles. As a tutor, I design and lead personalized mathematics lessons for underrepresented students. \
At UniCS, I co-organize and facilitate game development workshops, mentoring over 100 society members in game design and programming. \
Both roles have been about collaborating, teaching, and leading.";

const PERSONAL: &str = "Outside academics, I'm passionate about badminton, where I've competed at the county level and won several club tournaments. \
I also enjoy exploring creative challenges in game development, such as building unique mechanics and immersive worlds that merge technical and artistic skills. \
These hobbies balance my academic pursuits and keep me motivated.";

const TOOLS: &str = "I'm skilled in a range of tools and languages, including Python (for machine learning, NLP, and data visualization), JavaScript (Three.js for interactive 3D content), \
C# (for Unity game development), and C++ (for general programming problems). While not my first choice of language, \
I am also very familiar with the following from university: Java, C, HTML, CSS, PHP, Assembly.";

const TOOLS_DETAIL: &str = "I use Python for machine learning, NLP, and data visualization. \
For interactive 3D content on the web I use JavaScript with Three.js, for Unity game development I use C#, and for general programming problems I use C++. \
From university I'm also very familiar with Java, C, HTML, CSS, PHP, and Assembly.";

const ACHIEVEMENTS: &str = "Some of my proudest achievements include earning the Microsoft Azure AI Fundamentals certification with a 95% score and winning first place in my university's design and implementation award. \
Additionally, my leadership in a high school Games Creation Club helped foster a love for programming among younger students, demonstrating my commitment to mentorship and innovation.";

/// Builds the built-in portfolio catalog.
///
/// # Errors
///
/// Only fails if the static data above is edited into an invalid state.
pub fn portfolio_catalog() -> Result<TopicCatalog, ValidationError> {
    TopicCatalog::builder()
        .add(
            Topic::new(TopicId::new("projects")?, PROJECTS)
                .with_detail(PROJECTS_DETAIL)
                .with_synonyms([
                    "projects",
                    "games",
                    "work",
                    "projects I've worked on",
                    "creation",
                    "developments",
                    "undertakings",
                    "contributions",
                    "builds",
                    "designs",
                    "ventures",
                ]),
        )?
        .add(
            Topic::new(TopicId::new("education")?, EDUCATION)
                .with_detail(EDUCATION_DETAIL)
                .with_synonyms([
                    "education",
                    "studies",
                    "learning",
                    "school",
                    "academic",
                    "training",
                    "schooling",
                    "curriculum",
                    "degree",
                    "qualifications",
                    "knowledge acquisition",
                ]),
        )?
        .add(
            Topic::new(TopicId::new("experience")?, EXPERIENCE)
                .with_detail(EXPERIENCE_DETAIL)
                .with_synonyms([
                    "experience",
                    "background",
                    "expertise",
                    "knowledge",
                    "history",
                    "skills",
                    "track record",
                    "professional experience",
                    "work experience",
                    "know-how",
                    "competency",
                    "proficiency",
                ]),
        )?
        .add(Topic::new(TopicId::new("personal")?, PERSONAL).with_synonyms([
            "tell me about yourself",
            "about you",
            "your background",
            "who are you",
            "your story",
            "about yourself",
            "personal details",
            "yourself",
        ]))?
        .add(
            Topic::new(TopicId::new("tools")?, TOOLS)
                .with_detail(TOOLS_DETAIL)
                .with_synonyms([
                    "tools",
                    "technologies",
                    "software",
                    "languages",
                    "platforms",
                    "frameworks",
                    "technological stack",
                    "programming languages",
                    "development tools",
                    "skillset",
                ]),
        )?
        .add(
            Topic::new(TopicId::new("achievements")?, ACHIEVEMENTS).with_synonyms([
                "achievements",
                "accomplishments",
                "milestones",
                "awards",
                "recognitions",
                "successes",
                "honors",
                "certifications",
                "notable achievements",
                "victories",
                "distinctions",
                "certifications",
            ]),
        )?
        .build()
}
