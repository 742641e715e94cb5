pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod hermitecubic;
    }

    pub mod ode {
        pub mod rungekutta;
        pub mod antiderivative;
    }

    pub mod special {
        pub mod loggamma;
    }
}

pub mod structure {
    pub mod window;
    pub mod transformerror;
    pub mod massvariance;
}
