use chapter_router::{
    completion::Role,
    prompt::{build_messages, INSTRUCTION},
};

#[test]
fn five_turns_in_fixed_role_order() {
    let msgs = build_messages("Chapter 1 Cells ... 12", "What is mitosis?");
    let roles: Vec<Role> = msgs.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::User, Role::System, Role::User, Role::System, Role::User]
    );
    assert_eq!(msgs[0].content, INSTRUCTION);
}

#[test]
fn index_and_question_embedded_verbatim() {
    let index = "Chapter 11 The Muscular System\n  11.1 Interactions of Skeletal Muscles";
    let question = "Which muscles move the eyeball?";
    let msgs = build_messages(index, question);

    assert!(msgs[2].content.contains(index));
    assert!(msgs[4].content.contains(question));
    assert_eq!(msgs[2].content, format!("The index of the book is \n{index}"));
    assert_eq!(msgs[4].content, format!("The question is \n{question}"));
    assert!(!msgs[2].content.contains(question));
}

#[test]
fn empty_question_still_builds_five_turns() {
    let msgs = build_messages("", "");
    assert_eq!(msgs.len(), 5);
}
