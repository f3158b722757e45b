//! The FAQ set shipped with the binary: hiring questions first, then
//! questions from clients commissioning a system.

use domain::{FaqEntry, KnowledgeBase, KnowledgeBaseError};

const PROJECT_COST_ANSWER: &str = "The cost of a project depends on many factors, including complexity and features. We provide a detailed, no-obligation quote after our initial discovery call.";

const BUILTIN_FAQ: [(&str, &str); 17] = [
    // Hiring and recruitment
    (
        "What is your hiring process like?",
        "Our hiring process typically involves a phone screen, a technical interview with the team, and a final interview with a hiring manager. The process can vary by role.",
    ),
    (
        "How long does the hiring process take?",
        "The timeline can vary, but we generally aim to complete the process within 2-4 weeks. We'll keep you updated on your application status.",
    ),
    (
        "Do you have any open positions?",
        "You can view all of our current job openings on our career page on our website.",
    ),
    (
        "Can I apply for multiple positions?",
        "Yes, you can apply for any position you feel you are qualified for. Our recruiting team will review your application for all relevant roles.",
    ),
    (
        "Do you offer remote work?",
        "We offer a mix of in-office, hybrid, and fully remote positions. The working model is specified in the job description.",
    ),
    (
        "What programming languages do you use?",
        "We primarily work with Python, Java, JavaScript (React/Node.js), and C++, but the specific technologies can vary depending on the team and project.",
    ),
    (
        "What is your tech stack?",
        "Our tech stack includes AWS for cloud infrastructure, MongoDB for databases, and Docker for containerization. Specifics depend on the project.",
    ),
    (
        "What is the company culture like?",
        "We pride ourselves on a culture of collaboration, innovation, and respect. We encourage a healthy work-life balance.",
    ),
    (
        "What benefits do you offer?",
        "We offer a comprehensive benefits package that includes health insurance, paid time off, a retirement plan, and more. Details will be provided with a job offer.",
    ),
    // Clients building a system
    (
        "What is your process for building a system?",
        "Our process starts with a discovery phase to understand your needs, followed by planning, design, development, quality assurance, and deployment. We maintain continuous communication throughout the project.",
    ),
    ("How much does it cost to build a mobile app?", PROJECT_COST_ANSWER),
    ("How much does it cost to build a website?", PROJECT_COST_ANSWER),
    (
        "How long does it take to build a system?",
        "The timeline is highly dependent on the project scope. A simple system might take a few months, while a complex enterprise solution could take over a year.",
    ),
    (
        "Can you integrate with our existing systems?",
        "Yes, we have extensive experience integrating new systems with a wide range of existing software and databases. We will assess your current infrastructure during the discovery phase.",
    ),
    (
        "How will we track the project's progress?",
        "We provide access to a client portal where you can track progress in real-time. We also hold weekly meetings to review milestones and ensure we are aligned with your goals.",
    ),
    (
        "What happens after the system is launched?",
        "We offer post-launch support and maintenance packages to ensure your system runs smoothly. This can include bug fixes, security updates, and new feature development.",
    ),
    (
        "Do you provide a warranty?",
        "Yes, we offer a warranty period to fix any bugs or issues that may arise after the initial launch. The terms of the warranty are specified in our contract.",
    ),
];

pub fn builtin_entries() -> Vec<FaqEntry> {
    BUILTIN_FAQ
        .iter()
        .map(|(question, answer)| FaqEntry::new(*question, *answer))
        .collect()
}

pub fn builtin_knowledge_base() -> Result<KnowledgeBase, KnowledgeBaseError> {
    KnowledgeBase::new(builtin_entries())
}
