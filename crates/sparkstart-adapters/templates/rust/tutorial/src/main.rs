use std::io::{self, Write};

use rand::Rng;
use {{PROJECT_NAME_SNAKE}}::{check_guess, parse_guess, Hint, HIGH, LOW};

fn main() {
    let secret = rand::thread_rng().gen_range(LOW..=HIGH);
    let mut attempts = 0;

    println!("I'm thinking of a number between {LOW} and {HIGH}.");
    loop {
        print!("Your guess: ");
        io::stdout().flush().expect("flush stdout");

        let mut line = String::new();
        if io::stdin().read_line(&mut line).expect("read stdin") == 0 {
            println!("\nBye! The number was {secret}.");
            return;
        }

        let Some(guess) = parse_guess(&line) else {
            println!("Please enter a whole number from {LOW} to {HIGH}.");
            continue;
        };

        attempts += 1;
        match check_guess(guess, secret) {
            Hint::TooLow => println!("Too low!"),
            Hint::TooHigh => println!("Too high!"),
            Hint::Correct => {
                println!("Correct! You got it in {attempts} attempts.");
                return;
            }
        }
    }
}
