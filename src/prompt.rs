use crate::completion::{Message, Role};

pub const INSTRUCTION: &str = "Given a question and index of a book, specify which chapter does the question belong to. If there is any ambiguity, clarify with the user.";
pub const ACK_INDEX: &str = "Sure, provide me with the question and the index of the book.";
pub const ACK_QUESTION: &str =
    "Please ask a question, and I will respond with the lesson that the question pertains to.";

/// The fixed five-turn conversation: instruction, ack, index, ack, question.
pub fn build_messages(index: &str, question: &str) -> Vec<Message> {
    vec![
        Message::new(Role::User, INSTRUCTION),
        Message::new(Role::System, ACK_INDEX),
        Message::new(Role::User, format!("The index of the book is \n{index}")),
        Message::new(Role::System, ACK_QUESTION),
        Message::new(Role::User, format!("The question is \n{question}")),
    ]
}
