use crate::{
    events::Event,
    execution::Quoter,
    market::{broker::Broker, fair_value_agent::FairValueAgent},
    quoting::{parameters_repository::QuotingParametersRepository, quote_generator::QuoteGenerator},
    trading::trader::Trader,
    types::{
        decision::TradingDecision, fair_value::FairValue, quote::TwoSidedQuote,
        quoting_parameters::QuotingParameters,
    },
};

/// Owns one component graph and serializes every recalculation through it.
///
/// Wiring is fixed and acyclic:
/// broker -> fair value -> quote generator -> trader -> quoter, with the
/// parameters repository feeding the quote generator as well. A trigger's
/// cascade has finished by the time the entry point returns.
pub struct QuotingEngine<B, Q> {
    broker: B,
    quoter: Q,
    fair_value_agent: FairValueAgent,
    parameters: QuotingParametersRepository,
    quote_generator: QuoteGenerator,
    trader: Trader,
}

impl<B: Broker, Q: Quoter> QuotingEngine<B, Q> {
    /// Parameters start at the repository defaults; apply operator values
    /// through `update_parameters` so they pass the change gate.
    pub fn new(broker: B, quoter: Q) -> Self {
        Self {
            broker,
            quoter,
            fair_value_agent: FairValueAgent::new(),
            parameters: QuotingParametersRepository::default(),
            quote_generator: QuoteGenerator::new(),
            trader: Trader::new(),
        }
    }

    /// The broker's market-data-changed signal.
    pub fn on_market_data(&mut self) {
        if self.fair_value_agent.recalc_markets(&self.broker) {
            self.regenerate_quote();
        }
    }

    pub fn update_parameters(&mut self, parameters: QuotingParameters) {
        if self.parameters.update_parameters(parameters) {
            self.regenerate_quote();
        }
    }

    pub fn change_active_status(&mut self, to: bool) {
        self.trader.change_active_status(
            to,
            self.quote_generator.latest_quote(),
            &self.broker,
            &mut self.quoter,
        );
    }

    fn regenerate_quote(&mut self) {
        let generated = self.quote_generator.handle_new_fair_value(
            self.fair_value_agent.latest_fair_value(),
            self.parameters.latest(),
        );

        if generated {
            self.trader.send_quote(
                self.quote_generator.latest_quote(),
                &self.broker,
                &mut self.quoter,
            );
        }
    }

    pub fn broker(&self) -> &B {
        &self.broker
    }

    pub fn broker_mut(&mut self) -> &mut B {
        &mut self.broker
    }

    pub fn quoter(&self) -> &Q {
        &self.quoter
    }

    pub fn fair_value_agent(&self) -> &FairValueAgent {
        &self.fair_value_agent
    }

    pub fn parameters(&self) -> &QuotingParametersRepository {
        &self.parameters
    }

    pub fn quote_generator(&self) -> &QuoteGenerator {
        &self.quote_generator
    }

    pub fn trader(&self) -> &Trader {
        &self.trader
    }

    pub fn on_new_fair_value(&mut self) -> &mut Event<FairValue> {
        self.fair_value_agent.new_value()
    }

    pub fn on_new_parameters(&mut self) -> &mut Event<QuotingParameters> {
        self.parameters.new_parameters()
    }

    pub fn on_new_quote(&mut self) -> &mut Event<TwoSidedQuote> {
        self.quote_generator.new_quote()
    }

    pub fn on_active_changed(&mut self) -> &mut Event<bool> {
        self.trader.active_changed()
    }

    pub fn on_new_trading_decision(&mut self) -> &mut Event<TradingDecision> {
        self.trader.new_trading_decision()
    }
}
