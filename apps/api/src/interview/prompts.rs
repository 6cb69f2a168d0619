// All LLM prompt templates for the interview module.
// Placeholders are `{name}` and are filled by `llm_client::prompts::render`.
// `{question_only}` / `{json_only}` take the shared closing instructions.

/// Resume section extraction.
/// Replace: {section_type}, {section_text}, {output_format}, {json_only}
pub const PARSE_SECTION_PROMPT: &str = r#"You are a resume parsing expert. ONLY extract structured information from the following {section_type} section.
Return a valid JSON array with no explanation.
Strictly use only the information provided.
Use double quotes for all keys and string values.

Text:
"""
{section_text}
"""

Return JSON Format:
{output_format}
{json_only}"#;

/// Output shape hints keyed by section type.
pub const EDUCATION_FORMAT: &str =
    r#"[{"institution": "...", "degree": "...", "year": "...", "gpa": "..."}]"#;
pub const PROJECTS_FORMAT: &str =
    r#"[{"name": "...", "description": "...", "technologies": ["..."]}]"#;
pub const WORK_EXPERIENCE_FORMAT: &str =
    r#"[{"company": "...", "year": "...", "description": "..."}]"#;
/// Hint for section types without a dedicated shape.
pub const UNKNOWN_SECTION_FORMAT: &str = "[]";

/// Replace: {candidate_name}, {role}, {question_only}
pub const INTRODUCTION_QUESTION_PROMPT: &str = r#"Generate an introduction question for {candidate_name} who is interviewing for a {role} role.
The question should help understand their background, skills, and general technical experience.
{question_only}"#;

/// Replace: {resume_json}, {question_only}
pub const PROJECT_QUESTION_PROMPT: &str = r#"Based on the following resume data:
```
{resume_json}
```

Generate a specific question about one of the candidate's projects. The question should:
1. Be specific to a project detail mentioned in the resume
2. Explore technical decisions, challenges, or technologies used
3. Help assess their depth of knowledge and problem-solving abilities

{question_only}"#;

/// Replace: {role}, {tech_stack}, {resume_json}, {question_only}
pub const TECHNICAL_QUESTION_PROMPT: &str = r#"Generate a specific technical question for a candidate interviewing for a {role} role.
The required tech stack is: {tech_stack}

Consider the candidate's experience from their resume:
```
{resume_json}
```

The question should:
1. Test their knowledge of one of the required technologies
2. Be relevant to their past experience if possible
3. Be appropriate for the {role} role

{question_only}"#;

/// Replace: {previous_question}, {answer}, {question_only}
pub const FOLLOWUP_QUESTION_PROMPT: &str = r#"The candidate was asked: "{previous_question}"

Their response was:
"{answer}"

Generate a relevant follow-up question that:
1. Digs deeper into their response
2. Asks for clarification on any unclear points
3. Explores their understanding of the topic further

{question_only}"#;

/// Replace: {role}, {tech_stack}, {question_only}
pub const CS_FUNDAMENTALS_QUESTION_PROMPT: &str = r#"Generate a computer science fundamentals question relevant for a {role} developer who works with {tech_stack}.

Focus on one of these areas:
- Data structures and their applications
- Algorithms concepts and complexity
- Operating systems principles
- Database concepts
- Networking fundamentals
- Computer architecture

The question should test core CS knowledge that any {role} developer should understand.
{question_only}"#;

/// No placeholders.
pub const DSA_QUESTION_PROMPT: &str = r#"Generate a easy-difficulty data structure and algorithm question similar to ones found on LeetCode, appropriate for testing problem-solving skills.

Return a only JSON object with the following format:
{
"question": "The full question text including all requirements and constraints",
"example": "At least one example with input and expected output",
"topic": "The DSA topic (e.g., Arrays, Trees, Binary Search)",
"difficulty": "Easy"
}

Return only the json object without any additional explanations."#;

/// Replace: {role}, {question_type}, {question}, {answer}, {tech_stack}
pub const EVALUATE_ANSWER_PROMPT: &str = r#"Evaluate this {role} candidate's answer for a {question_type} question.

Question: "{question}"

Answer: "{answer}"

Relevant context:
- Role: {role}
- Required tech stack: {tech_stack}

Score the answer from 1-10, where:
1-3: Poor understanding, incorrect or vague response
4-6: Basic understanding with some gaps
7-8: Good understanding with minor issues
9-10: Excellent, comprehensive and accurate

Return a JSON object with this format:
{
"score": 7,
"feedback": "Brief explanation of strengths and weaknesses",
"areas_to_probe": "Suggestion for a follow-up area if needed"
}"#;

/// Replace: {candidate_name}, {role}, {log_summary}, {total_score},
///          {max_possible}, {percentage}
pub const SUMMARY_REPORT_PROMPT: &str = r#"Review this technical interview for {candidate_name} who applied for a {role} role.

Interview log summary:
```
{log_summary}
```

The candidate scored {total_score}/{max_possible} ({percentage}%).

Provide a comprehensive assessment including:
1. Overall impression
2. Technical strengths demonstrated
3. Areas for improvement
4. Hiring recommendation (Reject, Consider, Recommended, Highly Recommended)

Return a JSON object with this format:
{
"overall_impression": "...",
"technical_strengths": ["...", "..."],
"areas_for_improvement": ["...", "..."],
"recommendation": "..."
}"#;
