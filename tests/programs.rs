use equiprove::LoadError;
use equiprove::program::{GoalOutcome, Interpreter, Settings, parse_program};

fn run(text: &str) -> Vec<GoalOutcome> {
    let program = parse_program(text).unwrap();
    Interpreter::new(Settings::default()).run(&program)
}

#[test]
fn commutation_in_one_step() {
    let outcomes = run("axiom comm : (* x y) = (* y x).\n\
         prove (* 0 1) = (* 1 0).\n");

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].success);
    assert_eq!(outcomes[0].path.len(), 1);
    assert_eq!(outcomes[0].path[0].rule, "comm");
    assert_eq!(outcomes[0].path[0].formula.to_string(), "(* 1 0)");
}

#[test]
fn identical_statements() {
    let outcomes = run("prove 0 = 0.");

    assert!(outcomes[0].success);
    assert!(outcomes[0].path.is_empty());
}

#[test]
fn inequivalent_under_commutation() {
    let outcomes = run("axiom comm : (* x y) = (* y x).\n\
         param max_search_depth 3.\n\
         prove (* 0 1) = (* 1 1).\n");

    assert!(!outcomes[0].success);
    assert!(outcomes[0].path.is_empty());
    assert_eq!(outcomes[0].states_explored, 2);
}

#[test]
fn zero_depth_checks_only_the_start() {
    let outcomes = run("axiom comm : (* x y) = (* y x).\n\
         param max_search_depth 0.\n\
         prove (* 0 1) = (* 1 0).\n");

    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].states_explored, 1);
}

#[test]
fn proved_goal_is_reused() {
    let program = parse_program(
        "axiom comm : (* x y) = (* y x).\n\
         param use_proofs_as_axioms true.\n\
         prove (* 0 1) = (* 1 0).\n\
         prove (+ (* 0 1) 1) = (+ (* 1 0) 1).\n",
    )
    .unwrap();
    let mut interpreter = Interpreter::new(Settings::default());
    let outcomes = interpreter.run(&program);

    assert!(outcomes.iter().all(|outcome| outcome.success));
    assert_eq!(interpreter.store().len(), 3);
    assert_eq!(
        interpreter.store().axioms()[1].name(),
        "proof of (* 0 1) = (* 1 0)"
    );
}

#[test]
fn boolean_algebra_demo_loads_and_runs() {
    let text = include_str!("../demos/boolean_algebra.prf");
    let program = parse_program(text).unwrap();
    let outcomes = Interpreter::new(Settings::default()).run(&program);

    assert_eq!(outcomes.len(), program.goals().count());
    assert!(outcomes.iter().all(|outcome| outcome.success));
}

#[test]
fn load_error_renders_caret() {
    let error = parse_program("axiom comm : (* x y) = (* y x).\nprove (* 0 1 = 0.").unwrap_err();
    assert!(matches!(error, LoadError::Syntax { .. }));

    let rendered = error.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "prove (* 0 1 = 0.");
    assert!(lines[1].trim_start().starts_with('^'));
    assert!(lines[2].starts_with("Error (line 2, column"));
}
