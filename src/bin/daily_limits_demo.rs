use chrono::Duration;
use daily_limits::{
    config::Config,
    core::{Clock, SystemClock},
    currency::format_amount,
    errors::CalculatorError,
    init,
    ledger::{format_date, CaloriesCalculator, CashCalculator, LimitTracker, Record},
};

fn main() {
    init();

    if let Err(err) = run(&Config::default()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CalculatorError> {
    let yesterday = format_date(SystemClock.today() - Duration::days(1));

    let mut cash = CashCalculator::new(config.cash_limit).with_rates(config.rates.clone());
    cash.add_record(Record::new(100.0, "Lunch"));
    cash.add_record(Record::dated(150.0, "Gift", yesterday.as_str()));

    println!("{}", format_amount(cash.get_today_stats()));
    println!("{}", format_amount(cash.get_week_stats()?));
    print_cash(&cash, config)?;

    cash.add_record(Record::new(900.0, "Taxi"));
    print_cash(&cash, config)?;

    cash.add_record(Record::new(5000.0, "New phone"));
    print_cash(&cash, config)?;

    println!("{}", "-".repeat(50));

    let mut calories = CaloriesCalculator::new(config.calories_limit);
    calories.add_record(Record::new(100.0, "Lunch"));
    calories.add_record(Record::dated(150.0, "Fast food", yesterday.as_str()));

    println!("{}", format_amount(calories.get_today_stats()));
    println!("{}", format_amount(calories.get_week_stats()?));
    println!("{}", calories.get_calories_remained());

    calories.add_record(Record::new(900.0, "Cake"));
    println!("{}", calories.get_calories_remained());

    Ok(())
}

fn print_cash(cash: &CashCalculator, config: &Config) -> Result<(), CalculatorError> {
    for currency in &config.currencies {
        println!("{}", cash.get_today_cash_remained(currency)?);
    }
    Ok(())
}
