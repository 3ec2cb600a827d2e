//! Common source code fixtures for tests.

// Plain Java
pub const SIMPLE_CLASS: &str = "class A {}";

pub const CLASS_WITH_MEMBERS: &str = r#"
package com.acme.bank;

import java.util.List;
import java.io.*;

/** An account. */
public class Account extends Base implements Serializable {
    private static final long serialVersionUID = 1L;
    private List<String> owners;
    private int balance = 0;

    public Account(int initial) {
        this.balance = initial;
    }

    public synchronized void deposit(int amount) throws IOException {
        if (amount <= 0) {
            throw new IllegalArgumentException("amount");
        }
        balance += amount;
    }

    public int getBalance() { return balance; }
}
"#;

pub const ENUM_AND_INTERFACE: &str = r#"
public enum Color implements Named {
    RED("r"), GREEN("g") { String code() { return "G"; } }, BLUE("b");

    private final String code;

    Color(String code) { this.code = code; }
}

interface Named extends Comparable<Named>, Cloneable {
    String name();
    int MAX = 10;
}

@interface Audited {
    String value() default "";
    int level() default 1;
}
"#;

// Aspects
pub const TRACING_ASPECT: &str = r#"
package com.acme.trace;

import org.aspectj.lang.*;

public aspect Tracer {
    pointcut traced(): execution(* com.acme..*.*(..)) && !within(Tracer);

    before(): traced() {
        System.out.println("enter " + thisJoinPoint);
    }

    after() returning(Object r): traced() {
        System.out.println("exit " + r);
    }

    after() throwing(Exception e): traced() {
        e.printStackTrace();
    }

    Object around(): traced() {
        return proceed();
    }
}
"#;

pub const INTRODUCTION_ASPECT: &str = r#"
privileged aspect Introductions percflow(execution(* Main.main(..))) {
    private int Point.count = 0;
    public void Point.reset() { count = 0; }
    public Point.new(int x, int y) { this(); }

    declare parents: com.acme.model.* implements java.io.Serializable;
    declare parents: Point extends BasePoint;
    declare warning: call(* java.sql..*.*(..)) && !within(com.acme.dao..*): "use the dao";
    declare error: set(* Point.*) && !withincode(* Point.set*(..)): "use a setter";
    declare soft: java.io.IOException: execution(* Point.load(..));
    declare precedence: Security*, Tracer, *;
    declare @type: com.acme.model.*: @Entity;
    declare @field: int Point.*: @Transient;
    declare @constructor: Point.new(..): @Inject;
}
"#;

pub const ABSTRACT_ASPECT: &str = r#"
public abstract aspect Monitor pertarget(monitored()) {
    protected abstract pointcut monitored();

    pointcut withArgs(int n, String s): monitored() && args(n, s, ..) && if(n > 0);

    void around(int n): withArgs(n, *) && cflowbelow(monitored()) {
        proceed(n + 1);
    }
}
"#;
