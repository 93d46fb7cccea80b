//! Static content shown while the panel is in informational mode.

pub struct BuildSection {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct BuildInfo {
    pub heading: &'static str,
    pub sections: &'static [BuildSection],
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    heading: "How I built this AI agentic chat-bot:",
    sections: &[
        BuildSection {
            title: "Overview",
            body: "This chatbot is a custom Retrieval-Augmented Generation (RAG) system that I \
                   built. It includes a custom built, local agentic pipeline, and pre-processing \
                   system. It can answer nuanced questions about my experience, skills, and \
                   background by retrieving relevant context from a curated knowledge base \
                   before generating a response.",
        },
        BuildSection {
            title: "Vector Database — LanceDB",
            body: "As a pre-process, my resume, project write-ups, and other source documents \
                   are tokenized, chunked, embedded, and stored in a LanceDB vector database \
                   using an embedding specific model. Then, at query time, the most \
                   semantically relevant chunks are retrieved using cosine similarity search.",
        },
        BuildSection {
            title: "Agentic Pipeline",
            body: "A Python based LangGraph agent orchestrates the retrieval and generation \
                   steps. It decides which documents to include, formats the context window, \
                   and then calls a cloud based LLM model with a detailed system prompt which \
                   directs the LLM to only answer questions based on the factual documents \
                   that were provided. This way it can provide tailored answers which \
                   represent me accurately and honestly, while still using the natural \
                   language skills of the LLM. This greatly reduces the chances of \
                   hallucinations.",
        },
        BuildSection {
            title: "Stack",
            body: "FastAPI · LanceDB · Python · LangGraph · Claude Code · React + TypeScript frontend. \
                   Documents are ingested via a custom preprocessing python pipeline that \
                   handles chunking and embedding generation.",
        },
    ],
};
