use acton_query::config::Config;
use acton_query::{DirectiveParser, Directives, FilterSyntax, OrderSyntax, QueryParams};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

#[derive(Args)]
pub struct ParseArgs {
    /// Query string, with or without the leading `?`
    #[arg(value_name = "QUERY")]
    query: String,

    /// Filter syntax (overrides configuration)
    #[arg(long, value_enum, value_name = "SYNTAX")]
    filter_syntax: Option<FilterSyntaxArg>,

    /// Order syntax (overrides configuration)
    #[arg(long, value_enum, value_name = "SYNTAX")]
    order_syntax: Option<OrderSyntaxArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterSyntaxArg {
    /// filters=field[op]value,...
    BracketList,
    /// field[op]=value&...
    BracketPerKey,
}

impl From<FilterSyntaxArg> for FilterSyntax {
    fn from(arg: FilterSyntaxArg) -> Self {
        match arg {
            FilterSyntaxArg::BracketList => FilterSyntax::BracketList,
            FilterSyntaxArg::BracketPerKey => FilterSyntax::BracketPerKey,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderSyntaxArg {
    /// order=field:asc,...
    ColonList,
    /// sort[0]=field asc&...
    IndexedSort,
}

impl From<OrderSyntaxArg> for OrderSyntax {
    fn from(arg: OrderSyntaxArg) -> Self {
        match arg {
            OrderSyntaxArg::ColonList => OrderSyntax::ColonList,
            OrderSyntaxArg::IndexedSort => OrderSyntax::IndexedSort,
        }
    }
}

pub fn execute(config: &Config, args: ParseArgs) -> Result<()> {
    let directives = directives_for(config, &args);

    let json = if args.pretty {
        serde_json::to_string_pretty(&directives)
    } else {
        serde_json::to_string(&directives)
    }
    .context("Failed to serialize directives")?;

    println!("{json}");
    Ok(())
}

fn directives_for(config: &Config, args: &ParseArgs) -> Directives {
    let mut directives = config.directives.clone();
    if let Some(syntax) = args.filter_syntax {
        directives.filter_syntax = syntax.into();
    }
    if let Some(syntax) = args.order_syntax {
        directives.order_syntax = syntax.into();
    }

    DirectiveParser::from_config(&directives).parse(&QueryParams::parse(&args.query))
}
