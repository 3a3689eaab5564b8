use dotenv::dotenv;
use nlg_aggregate::{
    aggregation::{aggregator::Aggregator, generic::try_to_aggregate, rules::Rule},
    config::AggregationConfig,
    structure::{element::Element, notation::NotationParser},
};
use std::{error::Error, io::{stdin, stdout, Write}};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let aggregator = Aggregator::new(AggregationConfig::from_env()?);
    println!("Enter two sentences (bracket notation or JSON). An empty line quits.");

    loop {
        print!("First: ");
        let Some(first) = read_sentence()? else { break };
        print!("Second: ");
        let Some(second) = read_sentence()? else { break };

        for rule in Rule::ALL {
            report(rule.name(), rule.apply(&first, &second));
        }
        match (try_to_aggregate(Some(&first), Some(&second)), aggregator.aggregate(&first, &second)) {
            (Ok(generic), Ok(pipeline)) => {
                report("generic", generic);
                report("pipeline", pipeline);
            }
            (Err(e), _) | (_, Err(e)) => println!("{}", e),
        }
    }

    Ok(())
}

fn report(name: &str, result: Option<Element>) {
    match result {
        Some(merged) => println!("{:>24}: {}", name, merged),
        None => println!("{:>24}: no match", name),
    }
}

fn read_sentence() -> Result<Option<Element>, Box<dyn Error>> {
    loop {
        let line = read_line()?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        match parse_sentence(&line) {
            Ok(sentence) => return Ok(Some(sentence)),
            Err(e) => print!("{}\nTry again: ", e),
        }
    }
}

fn parse_sentence(line: &str) -> Result<Element, Box<dyn Error>> {
    if line.trim_start().starts_with('{') {
        Ok(serde_json::from_str(line)?)
    } else {
        Ok(NotationParser::parse_sentence(line)?)
    }
}

fn read_line() -> Result<String, std::io::Error> {
    let mut s = String::new();
    stdout().flush()?;
    stdin().read_line(&mut s)?;
    if let Some('\n') = s.chars().next_back() {
        s.pop();
    }
    if let Some('\r') = s.chars().next_back() {
        s.pop();
    }
    Ok(s)
}
