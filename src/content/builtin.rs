use crate::content::types::{Content, Experience, Link, News, Profile, Publication};
use crate::typewriter::Phrase;

fn link(name: &str, url: &str, icon: &str) -> Link {
    Link {
        name: name.to_string(),
        url: url.to_string(),
        icon: Some(icon.to_string()),
    }
}

fn news(id: &str, date: &str, content: &str) -> News {
    News {
        id: id.to_string(),
        date: date.to_string(),
        content: content.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn builtin() -> Content {
    let profile = Profile {
        name: "Tingshuo Fan".to_string(),
        title: "Undergraduate Student".to_string(),
        institution: "Fudan University (FNLP Lab)".to_string(),
        email: "fantingshuo@qq.com".to_string(),
        location: "Shanghai, China".to_string(),
        avatar_url: "https://github.com/Survivor613.png".to_string(),
        bio: "Hello, I am **Tingshuo Fan**, a sophomore student at **Fudan University**, \
              pursuing a double degree in **English and Computer Science**. I am currently a \
              research assistant at the **Fudan Natural Language Processing Lab (FNLP)**, \
              focusing on **Large Language Models (LLM)**, **Retrieval-Augmented Generation \
              (RAG)**, and **Agents**."
            .to_string(),
        interests: strings(&[
            "Natural Language Processing",
            "Retrieval-Augmented Generation",
            "LLM Agents",
            "Global Reasoning",
        ]),
        social_links: vec![
            link("GitHub", "https://github.com/Survivor613", "Github"),
            link("Email", "mailto:fantingshuo@qq.com", "Mail"),
            link("Lab Homepage", "https://openmoss.github.io", "Globe"),
        ],
    };

    let focus = default_focus();

    let news = vec![
        news(
            "n1",
            "Nov 2025",
            "**GlobalQA** paper received minor revisions! Started research on \
             **Multi-Modal RAG** and VLM-based retrieval.",
        ),
        news(
            "n2",
            "Nov 2025",
            "Submitted **MARAG-R1** to **CJC** and **arXiv**. Conducted experiments for the appendix.",
        ),
        news(
            "n3",
            "Oct 2025",
            "Submitted **GlobalQA** to **CJE** and **arXiv**. Completed surveys on **Graph-based RAG**.",
        ),
        news(
            "n4",
            "Oct 2025",
            "Built enterprise-level RAG pipelines using **Dify** and deployed local models using Docker.",
        ),
        news(
            "n5",
            "Sep 2025",
            "Joined **FNLP Lab**. Contributed to the dataset analysis and experiments for **GlobalQA**.",
        ),
    ];

    let publications = vec![
        Publication {
            id: "p1".to_string(),
            title: "MARAG-R1: Beyond Single Retriever via Reinforcement-Learned Multi-Tool \
                    Agentic Retrieval"
                .to_string(),
            authors: strings(&[
                "Qi Luo",
                "Xiaonan Li",
                "Yuxin Wang",
                "Tingshuo Fan",
                "Xingchi Chen",
                "Xipeng Qiu",
            ]),
            venue: "Chinese Journal of Computers (CJC)".to_string(),
            year: 2025,
            thumbnail: Some(
                "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            ),
            links: vec![link("ArXiv", "https://arxiv.org/abs/2510.27569", "FileText")],
            highlight: true,
            summary: Some(
                "提出 MARAG-R1，一种通过强化学习协调多种检索工具的多工具检索增强生成框架，\
                 使大模型能主动整合更丰富的外部信息以进行全局推理。相较以往单一检索或图结构方法，\
                 MARAG-R1 通过监督微调与强化学习结合，实现了多步工具调用策略学习，\
                 在多个全局推理基准上取得了新的最优性能。"
                    .to_string(),
            ),
        },
        Publication {
            id: "p2".to_string(),
            title: "Towards Global Reasoning in RAG: Tool-Augmented Agents with a New Benchmark"
                .to_string(),
            authors: strings(&[
                "Qi Luo",
                "Xiaonan Li",
                "Tingshuo Fan",
                "Xingchi Chen",
                "Xipeng Qiu",
            ]),
            venue: "Chinese Journal of Electronics (CJE)".to_string(),
            year: 2025,
            thumbnail: Some(
                "https://images.unsplash.com/photo-1482160549825-59d1b23cb208?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            ),
            links: vec![link("ArXiv", "https://arxiv.org/abs/2510.26205", "FileText")],
            highlight: false,
            summary: Some(
                "提出 GlobalQA 数据集及 GlobalRAG 基线，系统评测 RAG 系统在全局语料推理任务中的表现。"
                    .to_string(),
            ),
        },
    ];

    let experience = vec![
        Experience {
            id: "e1".to_string(),
            role: "Research Assistant".to_string(),
            institution: "Natural Language Processing Lab, Fudan University".to_string(),
            period: "Aug 2025 – Present".to_string(),
            description: Some("Focus Areas: Agent / RAG".to_string()),
        },
        Experience {
            id: "e2".to_string(),
            role: "Bachelor of Arts in English Linguistics & CS".to_string(),
            institution: "Fudan University".to_string(),
            period: "Sept 2024 – Present".to_string(),
            description: Some("Double Degree Program".to_string()),
        },
    ];

    Content {
        profile,
        focus,
        news,
        publications,
        experience,
    }
}

/// Hero phrases used when a content file lists none.
pub(crate) fn default_focus() -> Vec<Phrase> {
    vec![
        Phrase::styled("Natural Language Processing", "blue"),
        Phrase::styled("RAG Systems", "violet"),
        Phrase::styled("LLM Agents", "pink"),
        Phrase::styled("Global Reasoning", "cyan"),
    ]
}
