use drill_engine::{Engine, ExerciseInstance};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing_subscriber::EnvFilter;

/// Prints the prompt and answer choices of an exercise.
fn present(instance: &ExerciseInstance) {
    println!();
    println!("Evaluate: {}", instance.display);
    for option in &instance.options {
        println!("  {}) {}", option.label, option.value);
    }
    println!("(answer with a letter, `s` to show the solution, `n` for a new exercise, `q` to quit)");
}

/// Prints the worked solution of an exercise, one reduction per step.
fn show_solution(instance: &ExerciseInstance) {
    for (n, step) in instance.steps.iter().enumerate() {
        println!();
        println!("Step {}: {}", n + 1, step.title);
        println!("  {}", step.rationale);
        println!("  {}  ->  {}", step.before, step.after);
    }
    println!();
    println!("Answer: {}", instance.answer);
}

/// Grades the given label against the current exercise, printing the verdict.
fn answer(engine: &Engine, instance: &ExerciseInstance, label: char) {
    match engine.grade(instance, label) {
        Ok(grade) if grade.correct => println!("Correct! {} = {}", instance.display, grade.correct_value),
        Ok(grade) => println!(
            "Not quite. The correct choice was {}) {}. Type `s` to see why.",
            grade.correct_label, grade.correct_value,
        ),
        Err(err) => println!("{}", err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("failed to initialize line editor: {}", err);
            std::process::exit(1);
        },
    };

    let mut engine = Engine::new();
    let mut instance = engine.request_exercise();
    present(&instance);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                match input {
                    "" => continue,
                    "q" | "quit" => break,
                    "n" | "next" => {
                        instance = engine.request_exercise();
                        present(&instance);
                    },
                    "s" | "solution" => show_solution(&instance),
                    _ => {
                        let mut chars = input.chars();
                        match (chars.next(), chars.next()) {
                            (Some(label), None) => {
                                answer(&engine, &instance, label.to_ascii_uppercase());
                            },
                            _ => println!("unrecognized input: `{}`", input),
                        }
                    },
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{:?}", err);
                break;
            },
        }
    }
}
