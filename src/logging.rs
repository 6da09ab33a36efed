//! Progress reporting of a boosting run.
use colored::Colorize;

use crate::{
    Booster,
    WeakLearner,
    booster::Termination,
};

use std::time::Instant;
use std::ops::ControlFlow;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Statistics of the last completed boosting round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    /// Round number, starting from `1`.
    pub round: usize,
    /// Weighted error of the new weak learner.
    pub weighted_error: f64,
    /// Coefficient on the new weak learner.
    pub coefficient: f64,
    /// 0/1 training error of the ensemble so far.
    pub train_error: f64,
    /// Number of examples the weak learner was fitted on.
    pub active: usize,
}


/// Boosters that report their progress to [`Logger`].
pub trait RoundStatus {
    /// Returns the statistics of the last accepted round,
    /// or `None` before the first one.
    fn last_round(&self) -> Option<RoundSummary>;

    /// Returns why the run stopped (or would stop now).
    fn termination(&self) -> Termination;
}


/// Struct `Logger` runs a booster
/// and prints the weighted error, coefficient,
/// training error, and running time
/// every `print_every` rounds.
pub struct Logger<B, W> {
    booster: B,
    weak_learner: W,
    round: usize,
}


impl<B, W> Logger<B, W> {
    /// Create a new instance of `Logger`.
    /// By default, `Logger` prints nothing.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self { booster, weak_learner, round: usize::MAX, }
    }


    /// Set the interval to print the current status.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    /// Returns the wrapped booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


impl<H, B, W> Logger<B, W>
    where B: Booster<H> + RoundStatus,
          W: WeakLearner<Hypothesis = H>,
{
    #[inline(always)]
    fn silent(&self) -> bool {
        self.round == usize::MAX
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "WEIGHTED".bold().blue(),
            "COEF.".bold().green(),
            "TRAIN".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().blue(),
            "".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run(&mut self) -> B::Output {
        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();
        if !self.silent() {
            self.print_stats();
            self.print_log_header();
        }

        let silent = self.silent();
        let every = self.round;

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        let _ = (1..).try_for_each(|iter| {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, iter);
            time_acc += now.elapsed().as_millis();

            if silent { return flow; }

            let summary = self.booster.last_round()
                .filter(|s| s.round == iter);
            if let Some(s) = summary {
                if iter % every == 0 {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}",
                        "[LOG]".bold().magenta(),
                        format!("{:>WIDTH$}", iter).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", s.weighted_error).blue(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", s.coefficient).green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", s.train_error).yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
            }

            if let ControlFlow::Break(rounds) = flow {
                println!(
                    "{} {}\t\t{}\n",
                    "[FIN]".bold().bright_green(),
                    format!("{:>WIDTH$}", rounds).red(),
                    format!("{}", self.booster.termination()).bold().green(),
                );
            }
            flow
        });

        self.booster.postprocess()
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


/// Formats milliseconds as `ss.mmms`, `mm ss`, or `hh mm`.
pub fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
