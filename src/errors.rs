error_chain! {
    errors {
        InvalidSequence(reason: String) {
            description("invalid input sequence")
            display("invalid input sequence: {}", reason)
        }

        UnsupportedSystem(name: String) {
            description("unsupported Cas system")
            display("unsupported Cas system {:?}", name)
        }

        UnsupportedGenomeBuild(name: String) {
            description("unsupported genome build")
            display("unsupported genome build {:?}", name)
        }

        GenomeLookupError(reason: String) {
            description("genome lookup failed")
            display("genome lookup failed: {}", reason)
        }

        InternalInvariantViolation(reason: String) {
            description("internal invariant violated")
            display("internal invariant violated: {}", reason)
        }
    }
}
