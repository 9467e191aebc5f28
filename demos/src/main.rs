use dfa_table::dfa::{Dfa, State, StepObserver};
use dfa_table::error_handling::Result;

use clap::{Arg, Command};

struct ConsoleTrace;

impl StepObserver for ConsoleTrace {
    fn on_step(&mut self, symbol: char, from: State, to: Option<State>) {
        match to {
            Some(to) => println!(
                "Read \"{}\" at stateID:[{}], goto stateID:[{}]",
                symbol,
                from.id(),
                to.id()
            ),
            None => println!("Read \"{}\" at stateID:[{}], reject", symbol, from.id()),
        }
    }
}

fn main() -> Result<()> {
    let matches = Command::new("dfa-demo")
        .version("1.0")
        .arg(
            Arg::new("input")
                .help("Input string to run through the automaton")
                .default_value("ab111ba")
                .value_name("INPUT"),
        )
        .get_matches();

    let input: &String = matches.get_one("input").expect("input has a default");

    // Transition table for the regular expression (a + b)(a + b + 1)*.
    // State ids start at 1 so the trace reads q1..q6.
    let mut dfa = Dfa::with_starting_id(1);

    let states = dfa.declare_states(6)?;
    let q1 = states[0];
    dfa.set_start_state(q1)?;
    dfa.set_accept_states(&states[1..])?;

    dfa.set_alphabet(&['a', 'b', '1'])?;

    // Each transition function is one row of the minimized transition
    // table; the second row is shared by q2..q6.
    let row_1 = dfa.define_transition_function(&[Some(states[1]), Some(states[2]), None])?;
    let row_2 =
        dfa.define_transition_function(&[Some(states[3]), Some(states[4]), Some(states[5])])?;

    dfa.attach_transition_function(q1, row_1)?;
    for state in &states[1..] {
        dfa.attach_transition_function(*state, row_2)?;
    }

    let accepted = dfa.check_with_observer(input, &mut ConsoleTrace);
    println!("{}", if accepted { "[Pass]" } else { "[Fail]" });

    Ok(())
}
