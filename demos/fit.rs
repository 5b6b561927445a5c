use exactfit::prelude::{equation, solve, verify};

// Usage: cargo run --example fit -- 1,2 2,4 3,6
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pairs: Vec<(String, String)> = if args.is_empty() {
        vec![
            ("1".into(), "1".into()),
            ("2".into(), "0.5".into()),
            ("3".into(), "-2".into()),
        ]
    } else {
        match args
            .iter()
            .map(|a| a.split_once(',').map(|(x, y)| (x.to_string(), y.to_string())))
            .collect::<Option<Vec<_>>>()
        {
            Some(pairs) => pairs,
            None => {
                eprintln!("points must be given as x,y");
                std::process::exit(2);
            }
        }
    };
    let (xs, ys): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();

    match solve(&xs, &ys) {
        Ok(coefficients) => println!("coefficients: {}", coefficients.join(" ")),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
    if let Ok(latex) = equation(&xs, &ys) {
        println!("{latex}");
    }
    println!("{}", verify(&ys));
}
