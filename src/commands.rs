pub mod models {
    use crate::families::KeypadFamily;
    use crate::output;
    use strum::VariantArray as _;

    /// List the keypad families and their known model codes.
    #[derive(clap::Parser)]
    pub struct Args {
        /// Only list models of this family.
        #[arg(long, short = 'F', value_enum)]
        family: Option<KeypadFamily>,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not write the output")]
        Output(#[source] output::Error),
    }

    #[derive(serde::Serialize)]
    struct ModelRecord {
        family: KeypadFamily,
        model: &'static str,
        buttons: usize,
        leds: usize,
        ccis: usize,
        advanced: bool,
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let mut output = args.output.to_output().map_err(Error::Output)?;
        output
            .table_headers(vec!["Family", "Model", "Buttons", "LEDs", "CCIs", "Advanced"])
            .map_err(Error::Output)?;
        let families = match args.family {
            Some(family) => vec![family],
            None => KeypadFamily::VARIANTS.to_vec(),
        };
        for family in families {
            let registry = family.registry();
            for model in registry.model_codes() {
                let set = registry.components_for(Some(model)).components;
                let record = ModelRecord {
                    family,
                    model,
                    buttons: set.buttons.len(),
                    leds: set.leds.len(),
                    ccis: set.ccis.len(),
                    advanced: registry.advanced_channels(),
                };
                output
                    .result(
                        || {
                            vec![
                                record.family.to_string(),
                                record.model.to_string(),
                                record.buttons.to_string(),
                                record.leds.to_string(),
                                record.ccis.to_string(),
                                record.advanced.to_string(),
                            ]
                        },
                        || &record,
                    )
                    .map_err(Error::Output)?;
            }
        }
        output.commit().map_err(Error::Output)
    }
}

pub mod components {
    use crate::families::KeypadFamily;
    use crate::output;

    /// Print the buttons, LEDs and contact closure inputs of a keypad model.
    #[derive(clap::Parser)]
    pub struct Args {
        #[arg(long, short = 'F', value_enum)]
        family: KeypadFamily,
        /// Model code as printed on the keypad, e.g. `10BRL` or `T5RL`.
        ///
        /// Unknown codes fall back to the family's default model.
        #[arg(long, short = 'm')]
        model: Option<String>,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not write the output")]
        Output(#[source] output::Error),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let config = args.family.registry().components_for(args.model.as_deref());
        let mut output = args.output.to_output().map_err(Error::Output)?;
        output
            .table_headers(vec!["Id", "Channel", "Type", "Description"])
            .map_err(Error::Output)?;
        for component in config.components.iter() {
            output
                .result(
                    || {
                        vec![
                            component.id().to_string(),
                            component.channel().to_string(),
                            component.kind().to_string(),
                            component.description().to_string(),
                        ]
                    },
                    || component,
                )
                .map_err(Error::Output)?;
        }
        output.commit().map_err(Error::Output)
    }
}

pub mod classify {
    use crate::component::ComponentType;
    use crate::families::KeypadFamily;
    use crate::output;

    /// Classify raw component ids as reported by a keypad.
    #[derive(clap::Parser)]
    pub struct Args {
        #[arg(long, short = 'F', value_enum)]
        family: KeypadFamily,
        /// Also look up the channel of each id on this model.
        #[arg(long, short = 'm')]
        model: Option<String>,
        #[arg(required = true)]
        ids: Vec<u16>,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not write the output")]
        Output(#[source] output::Error),
    }

    #[derive(serde::Serialize)]
    struct Classification<'a> {
        id: u16,
        #[serde(rename = "type")]
        kind: Option<ComponentType>,
        channel: Option<&'a str>,
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let registry = args.family.registry();
        let components = args
            .model
            .as_deref()
            .map(|model| registry.components_for(Some(model)).components);
        let mut output = args.output.to_output().map_err(Error::Output)?;
        output.table_headers(vec!["Id", "Type", "Channel"]).map_err(Error::Output)?;
        for &id in &args.ids {
            let record = Classification {
                id,
                kind: registry.classify(id),
                channel: components
                    .as_ref()
                    .and_then(|set| set.by_id(id))
                    .map(|component| component.channel()),
            };
            output
                .result(
                    || {
                        vec![
                            record.id.to_string(),
                            record.kind.map(|k| k.to_string()).unwrap_or_else(|| "unknown".into()),
                            record.channel.unwrap_or_default().to_string(),
                        ]
                    },
                    || &record,
                )
                .map_err(Error::Output)?;
        }
        output.commit().map_err(Error::Output)
    }
}
